use crate::page::listener::Subscription;
use crate::page::menu::MenuState;
use crate::page::motion::{Entrance, Phase};
use crate::page::navigation::{nav_links, NavLink};
use crate::page::palette::{Palette, PALETTE};
use crate::page::sections::{AnchorError, AnchorOffsets, Section};
use crate::page::state::{PageAction, PageState};
use gloo_timers::callback::Timeout;
use log::Level;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, HtmlElement};
use yew::prelude::*;

#[cfg(debug_assertions)]
const LOG_LEVEL: Level = Level::Debug;
#[cfg(not(debug_assertions))]
const LOG_LEVEL: Level = Level::Info;

const REVEAL_DEFER_MS: u32 = 16;
const GALLERY_TILES: u32 = 6;
const CONTACT_EMAIL: &str = "info@hansmoebel.com";

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.apply(action) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}

fn apply_palette(palette: &Palette) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("style", &palette.css_variables());
        }
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn scroll_offset() -> Result<f64, AnchorError> {
    window()
        .and_then(|w| w.scroll_y().ok())
        .ok_or(AnchorError::ScrollOffsetUnavailable)
}

/// Adds `callback` as a window listener for `event`. The listener is removed
/// when the returned subscription is dropped.
fn listen_window(event: &'static str, callback: impl FnMut() + 'static) -> Option<Subscription> {
    let callback = Closure::<dyn FnMut()>::new(callback);
    window()?
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .ok()?;

    Some(Subscription::new(move || {
        if let Some(win) = window() {
            let _ = win.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        }
    }))
}

#[derive(Clone, PartialEq)]
struct SectionRefs {
    home: NodeRef,
    work: NodeRef,
    about: NodeRef,
    contact: NodeRef,
}

impl SectionRefs {
    fn node(&self, section: Section) -> &NodeRef {
        match section {
            Section::Home => &self.home,
            Section::Work => &self.work,
            Section::About => &self.about,
            Section::Contact => &self.contact,
        }
    }

    /// Offsets are read from the live layout on every call.
    fn measure(&self) -> Result<AnchorOffsets, AnchorError> {
        AnchorOffsets::measure(|section| {
            self.node(section)
                .cast::<HtmlElement>()
                .map(|element| f64::from(element.offset_top()))
        })
    }
}

#[derive(Properties, PartialEq)]
struct RevealProps {
    entrance: Entrance,
    #[prop_or("div")]
    tag: &'static str,
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    children: Html,
}

#[function_component(Reveal)]
fn reveal(props: &RevealProps) -> Html {
    let phase = use_state(|| Phase::on_mount(prefers_reduced_motion()));

    {
        let phase = phase.clone();
        use_effect_with((), move |_| {
            let pending = (*phase == Phase::Initial).then(|| {
                let phase = phase.clone();
                Timeout::new(REVEAL_DEFER_MS, move || phase.set(Phase::Final))
            });
            move || drop(pending)
        });
    }

    html! {
        <@{props.tag} class={props.class.clone()} style={props.entrance.style(*phase)}>
            {props.children.clone()}
        </@>
    }
}

#[derive(Properties, PartialEq)]
struct NavListProps {
    active: Section,
    on_select: Callback<Section>,
}

#[function_component(NavList)]
fn nav_list(props: &NavListProps) -> Html {
    html! {
        <ul class="nav-links">
            { for nav_links(props.active).into_iter().map(|link| {
                let NavLink { section, label, href, treatment } = link;
                let onclick = props.on_select.reform(move |_: MouseEvent| section);
                html! {
                    <li key={label} class="pressable">
                        <a
                            class="nav-link"
                            href={href}
                            style={treatment.style(&PALETTE)}
                            aria-current={treatment.is_highlighted().then_some("true")}
                            onclick={onclick}
                        >
                            {label}
                        </a>
                    </li>
                }
            }) }
        </ul>
    }
}

#[derive(Properties, PartialEq)]
struct MenuOverlayProps {
    on_select: Callback<Section>,
}

#[function_component(MenuOverlay)]
fn menu_overlay(props: &MenuOverlayProps) -> Html {
    html! {
        <Reveal entrance={Entrance::OVERLAY} class={classes!("menu-overlay")}>
            <nav aria-label="Mobile">
                { for nav_links(Section::Home).into_iter().map(|link| {
                    let section = link.section;
                    let onclick = props.on_select.reform(move |_: MouseEvent| section);
                    html! {
                        <a
                            key={link.label}
                            class="menu-link pressable"
                            href={link.href}
                            style={format!("color: {};", PALETTE.text)}
                            onclick={onclick}
                        >
                            {link.label}
                        </a>
                    }
                }) }
            </nav>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
struct GalleryTileProps {
    index: u32,
}

#[function_component(GalleryTile)]
fn gallery_tile(props: &GalleryTileProps) -> Html {
    html! {
        <div class="gallery-tile pressable">
            <img
                src="/placeholder.svg?height=400&width=400"
                alt={format!("Furniture design {}", props.index)}
                loading="lazy"
            />
            <div class="gallery-tile-overlay">
                <p>{"View Details"}</p>
            </div>
        </div>
    }
}

#[function_component(ContactForm)]
fn contact_form() -> Html {
    let onsubmit = Callback::from(|event: SubmitEvent| {
        event.prevent_default();
        log::warn!("contact form submitted but no delivery channel is configured");
    });

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            <input type="text" name="name" placeholder="Your Name" aria-label="Your Name" />
            <input type="email" name="email" placeholder="Your Email" aria-label="Your Email" />
            <textarea name="message" placeholder="Your Message" aria-label="Your Message" rows="4"></textarea>
            <button type="submit" class="pill-button">{"Send Message"}</button>
        </form>
    }
}

#[function_component(App)]
fn app() -> Html {
    let page = use_reducer(PageState::default);
    let anchors = SectionRefs {
        home: use_node_ref(),
        work: use_node_ref(),
        about: use_node_ref(),
        contact: use_node_ref(),
    };

    {
        let dispatcher = page.dispatcher();
        let anchors = anchors.clone();
        use_effect_with((), move |_| {
            dispatcher.dispatch(PageAction::ScrollListenerAttached);

            let sample = {
                let dispatcher = dispatcher.clone();
                move || {
                    let measured = anchors.measure();
                    if let Err(error) = &measured {
                        log::debug!("section tracking skipped: {error}");
                    }
                    dispatcher.dispatch(PageAction::Scrolled {
                        offset: scroll_offset(),
                        anchors: measured,
                    });
                }
            };

            sample();
            let listener = listen_window("scroll", sample);
            if listener.is_none() {
                log::warn!("scroll listener could not be attached");
            }

            move || {
                drop(listener);
                dispatcher.dispatch(PageAction::ScrollListenerDetached);
            }
        });
    }

    use_effect_with(page.active, |active| {
        log::debug!("active section is now {active}");
        || ()
    });

    let on_toggle_menu = {
        let dispatcher = page.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(PageAction::ToggleMenu))
    };

    let on_select = {
        let dispatcher = page.dispatcher();
        Callback::from(move |section: Section| dispatcher.dispatch(PageAction::LinkSelected(section)))
    };

    let menu: MenuState = page.menu;
    let heading_style = format!("color: {};", PALETTE.primary);

    html! {
        <div class="page-shell">
            <header class="site-header">
                <nav class="site-nav">
                    <Reveal entrance={Entrance::BRAND} tag="h1" class={classes!("brand")}>
                        {"HANS MÖBEL"}
                    </Reveal>
                    <button
                        class="menu-toggle"
                        type="button"
                        aria-label={menu.toggle_label()}
                        aria-expanded={menu.is_open().to_string()}
                        onclick={on_toggle_menu}
                    >
                        <span aria-hidden="true">{menu.icon()}</span>
                    </button>
                    <NavList active={page.active} on_select={on_select.clone()} />
                </nav>
            </header>

            if menu.is_open() {
                <MenuOverlay on_select={on_select.clone()} />
            }

            <main class="container">
                <section id="home" ref={anchors.home.clone()} class="hero" style={page.hero.style()}>
                    <Reveal entrance={Entrance::HERO_TITLE} tag="h2" class={classes!("hero-title")}>
                        {"Crafting Timeless Furniture"}
                    </Reveal>
                    <Reveal entrance={Entrance::HERO_COPY} tag="p" class={classes!("hero-copy")}>
                        {"Elevate your space with our meticulously designed furniture. Each piece blends form and function, creating a harmonious balance of style and practicality for modern living."}
                    </Reveal>
                    <a href="#work" class="pill-button pressable">
                        {"Explore Our Work"}
                        <span class="icon-after" aria-hidden="true">{"⌄"}</span>
                    </a>
                </section>

                <section id="work" ref={anchors.work.clone()} class="content-section">
                    <Reveal entrance={Entrance::SECTION}>
                        <h2 class="section-title" style={heading_style.clone()}>{"Our Creations"}</h2>
                        <div class="gallery-grid">
                            { for (1..=GALLERY_TILES).map(|index| html! { <GalleryTile key={index} index={index} /> }) }
                        </div>
                    </Reveal>
                </section>

                <section id="about" ref={anchors.about.clone()} class="content-section">
                    <Reveal entrance={Entrance::SECTION}>
                        <h2 class="section-title" style={heading_style.clone()}>{"Our Philosophy"}</h2>
                        <div class="split">
                            <div class="split-half">
                                <p class="lead">
                                    {"At Hans Möbel, we believe in the power of simplicity and functionality. Our designs are rooted in the principle that less is more, focusing on clean lines and purposeful forms. We create furniture that not only looks beautiful but also enhances the lives of those who use it."}
                                </p>
                                <p class="lead">
                                    {"Every piece we craft is a testament to our commitment to quality, sustainability, and innovative design. We strive to create furniture that will be cherished for generations to come, blending timeless aesthetics with modern sensibilities."}
                                </p>
                            </div>
                            <div class="split-half media-frame hoverable">
                                <img src="/placeholder.svg?height=600&width=600" alt="Hans Möbel workshop" loading="lazy" />
                            </div>
                        </div>
                    </Reveal>
                </section>

                <section id="contact" ref={anchors.contact.clone()} class="content-section">
                    <Reveal entrance={Entrance::SECTION}>
                        <h2 class="section-title" style={heading_style}>{"Get in Touch"}</h2>
                        <div class="split">
                            <div class="split-half">
                                <p class="lead">
                                    {"We'd love to hear from you. Whether you're interested in our designs or want to collaborate, don't hesitate to reach out."}
                                </p>
                                <a class="email-link" href={format!("mailto:{CONTACT_EMAIL}")}>
                                    {CONTACT_EMAIL}
                                    <span class="icon-after" aria-hidden="true">{"→"}</span>
                                </a>
                            </div>
                            <div class="split-half">
                                <ContactForm />
                            </div>
                        </div>
                    </Reveal>
                </section>
            </main>

            <footer class="site-footer">
                {"© 2023 Hans Möbel. All rights reserved."}
            </footer>
        </div>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(LOG_LEVEL);
    apply_palette(&PALETTE);
    log::info!("mounting page");

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}

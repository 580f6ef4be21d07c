use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent, Node};

mod config;
mod components {
    pub mod listener;
    pub mod observers;
    pub mod scroll_progress;
    pub mod status_ticker;
}
mod contact {
    pub mod form;
    pub mod intake;
    pub mod transport;
    pub mod validation;
}
mod pages {
    pub mod home;
}

use components::listener::EventListener;
use components::scroll_progress::ScrollProgress;
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route, on_section_change: Callback<String>) -> Html {
    match route {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home {on_section_change} /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

const NAV_LINKS: [(&str, &str); 5] = [
    ("mission", "MISSION"),
    ("vision", "VISION"),
    ("team", "TEAM"),
    ("about", "ABOUT"),
    ("contact", "CONTACT"),
];

fn link_class(base: &'static str, id: &str, active: Option<&str>) -> Classes {
    classes!(base, (active == Some(id)).then_some("active"))
}

fn contains_target(node: &NodeRef, event: &web_sys::Event) -> bool {
    let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
    node.get()
        .map_or(false, |n| n.contains(target.as_ref()))
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active_section: Option<AttrValue>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let hamburger_ref = use_node_ref();
    let menu_ref = use_node_ref();

    // Outside clicks and Escape only matter while the menu is open.
    {
        let open_now = *menu_open;
        let menu_open = menu_open.clone();
        let hamburger_ref = hamburger_ref.clone();
        let menu_ref = menu_ref.clone();
        use_effect_with_deps(
            move |open| {
                let listeners = if *open {
                    web_sys::window().and_then(|w| w.document()).map(|document| {
                        let on_click = {
                            let menu_open = menu_open.clone();
                            let hamburger_ref = hamburger_ref.clone();
                            let menu_ref = menu_ref.clone();
                            EventListener::new(&document, "click", move |e| {
                                if !contains_target(&menu_ref, &e) && !contains_target(&hamburger_ref, &e) {
                                    menu_open.set(false);
                                }
                            })
                        };
                        let on_keydown = EventListener::new(&document, "keydown", move |e| {
                            let is_escape = e
                                .dyn_ref::<KeyboardEvent>()
                                .map_or(false, |k| k.key() == "Escape");
                            if is_escape {
                                menu_open.set(false);
                                if let Some(button) = hamburger_ref.cast::<HtmlElement>() {
                                    let _ = button.focus();
                                }
                            }
                        });
                        (on_click, on_keydown)
                    })
                } else {
                    None
                };
                move || drop(listeners)
            },
            open_now,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let open = *menu_open;
    let active = props.active_section.as_deref();

    html! {
        <nav class="top-nav">
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 900;
                        background: rgba(5, 8, 12, 0.85);
                        backdrop-filter: blur(8px);
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                    }
                    .main-nav a, .mobile-nav-link {
                        opacity: 0.6;
                        letter-spacing: 0.15em;
                        font-size: 0.8rem;
                        transition: opacity 0.2s ease;
                    }
                    .main-nav a.active, .mobile-nav-link.active {
                        opacity: 1;
                    }
                    .main-nav {
                        display: flex;
                        gap: 2rem;
                    }
                    .hamburger {
                        display: none;
                        background: none;
                        border: none;
                    }
                    .hamburger span {
                        display: block;
                        width: 22px;
                        height: 2px;
                        margin: 5px 0;
                        background: #e6f1ff;
                    }
                    .mobile-menu {
                        display: none;
                    }
                    @media (max-width: 768px) {
                        .main-nav {
                            display: none;
                        }
                        .hamburger {
                            display: block;
                        }
                        .mobile-menu.open {
                            display: flex;
                            flex-direction: column;
                            gap: 1.25rem;
                            padding: 1.5rem;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <a href="#hero" class="nav-logo">{"ASTRANEX"}</a>
                <div class="main-nav">
                    { for NAV_LINKS.iter().map(|(id, label)| html! {
                        <a href={format!("#{}", id)} class={link_class("nav-link", id, active)}>{*label}</a>
                    }) }
                </div>
                <button
                    id="hamburger-btn"
                    class="hamburger"
                    ref={hamburger_ref}
                    aria-label="Toggle navigation"
                    aria-controls="mobile-menu"
                    aria-expanded={if open { "true" } else { "false" }}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <div
                id="mobile-menu"
                class={classes!("mobile-menu", open.then_some("open"))}
                ref={menu_ref}
                aria-hidden={if open { "false" } else { "true" }}
            >
                { for NAV_LINKS.iter().map(|(id, label)| html! {
                    <a
                        href={format!("#{}", id)}
                        class={link_class("mobile-nav-link", id, active)}
                        onclick={close_menu.clone()}
                    >
                        {*label}
                    </a>
                }) }
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let active_section = use_state(|| None::<AttrValue>);
    let on_section_change = {
        let active_section = active_section.setter();
        Callback::from(move |id: String| active_section.set(Some(AttrValue::from(id))))
    };

    html! {
        <BrowserRouter>
            <ScrollProgress />
            <Nav active_section={(*active_section).clone()} />
            <Switch<Route> render={move |route: Route| switch(route, on_section_change.clone())} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

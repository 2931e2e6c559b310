use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::use_event_with_window;
use log::{debug, info, warn};
use web_sys::{window, Event, MouseEvent};

mod config;
mod error;
mod host;
mod service_flow;
mod components {
    pub mod accordion;
    pub mod faq;
    pub mod guide_steps;
}
mod pages {
    pub mod como_funciona;
    pub mod not_found;
    pub mod service_page;
}

use pages::{
    como_funciona::ComoFuncionaPage,
    not_found::NotFound,
    service_page::ServicePage,
};


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/como-funciona")]
    ComoFunciona,
    #[at("/diagnostico")]
    Diagnostico,
    #[at("/autoayuda")]
    Autoayuda,
    #[at("/reporte-estrategico")]
    ReporteEstrategico,
    #[at("/intervencion")]
    Intervencion,
    #[at("/representacion")]
    Representacion,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::ComoFunciona => {
            info!("Rendering ComoFunciona page");
            html! { <ComoFuncionaPage /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
        service => {
            let path = service.to_path();
            info!("Rendering service page for {}", path);
            html! { <ServicePage path={path} /> }
        },
    }
}

/// Hands a stage link to the router, or to the browser when no route matches.
pub fn navigate_to(navigator: Option<&Navigator>, path: &str) {
    match (navigator, Route::recognize(path)) {
        (Some(navigator), Some(route)) if route != Route::NotFound => {
            debug!("Navigating to {:?}", route);
            navigator.push(&route);
        }
        _ => {
            warn!("No client route for {}, doing a full page load", path);
            if let Some(window) = window() {
                let _ = window.location().set_href(path);
            }
        }
    }
}


/// The nav turns solid once the page has scrolled past its own height.
fn nav_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::SCROLL_OFFSET_PX
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_event_with_window("scroll", move |_: Event| {
            if let Some(scroll_y) = window().and_then(|w| w.scroll_y().ok()) {
                is_scrolled.set(nav_is_scrolled(scroll_y));
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Ruta Legal"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Abrir menú">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::ComoFunciona} classes="nav-link">
                            {"Cómo funciona"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Diagnostico} classes="nav-cta">
                            {"Diagnóstico gratis"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    height: 74px;
                    z-index: 100;
                    background: rgba(255, 255, 255, 0.9);
                    transition: box-shadow 0.3s ease;
                }

                .top-nav.scrolled {
                    box-shadow: 0 2px 12px rgba(15, 23, 42, 0.08);
                }

                .nav-content {
                    max-width: 1200px;
                    height: 100%;
                    margin: 0 auto;
                    padding: 0 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    font-weight: bold;
                    font-size: 1.3rem;
                    color: #1f2933;
                    text-decoration: none;
                }

                .nav-right {
                    display: flex;
                    gap: 1.5rem;
                    align-items: center;
                }

                .nav-link {
                    color: #52606d;
                    text-decoration: none;
                }

                .nav-cta {
                    padding: 0.5rem 1.2rem;
                    border-radius: 999px;
                    background: #2563eb;
                    color: #fff;
                    text-decoration: none;
                }

                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    cursor: pointer;
                }

                .burger-menu span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    margin: 5px 0;
                    background: #1f2933;
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: block;
                    }

                    .nav-right {
                        display: none;
                    }

                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 74px;
                        left: 0;
                        right: 0;
                        padding: 1rem 2rem;
                        background: #fff;
                    }
                }
                "#}
            </style>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

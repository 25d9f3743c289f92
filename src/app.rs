mod about;
mod activity;
mod contact;
mod experience;
mod footer;
mod hero;
mod navigation;
mod palette;
mod projects;
mod skills;
mod timer;
mod toast;

use leptos::{prelude::*, web_sys::HtmlElement};
use leptos_meta::*;
use leptos_router::{components::*, path};
use wasm_bindgen::JsCast;

#[cfg(feature = "hydrate")]
use codee::string::FromToStringCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
use crate::theme::THEME_STORAGE_KEY;
use crate::{content::OWNER, theme::ThemeMode};

use about::About;
use activity::Activity;
use contact::Contact;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use navigation::Navigation;
use palette::{CommandPaletteOverlay, PaletteHint};
use projects::Projects;
use skills::Skills;
use toast::{ToastArea, Toaster};

pub use activity::get_contributions_server;
pub use contact::send_message_server;

/// Height of the fixed navigation bar, subtracted when jumping to a section.
const NAV_HEIGHT: f64 = 80.0;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

/// Current colour mode plus the setter the navigation toggle uses.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub mode: Signal<ThemeMode>,
    set_mode: WriteSignal<ThemeMode>,
}

impl Theme {
    fn new() -> Self {
        // the server always renders the default; the stored choice lands on hydrate
        #[cfg(feature = "hydrate")]
        let (mode, set_mode, _) =
            use_local_storage::<ThemeMode, FromToStringCodec>(THEME_STORAGE_KEY);
        #[cfg(not(feature = "hydrate"))]
        let (mode, set_mode) = {
            let (mode, set_mode) = signal(ThemeMode::default());
            (Signal::from(mode), set_mode)
        };
        Self { mode, set_mode }
    }

    pub fn toggle(&self) {
        self.set_mode.update(|mode| *mode = mode.toggle());
    }
}

/// Scrolls so the section with `id` sits just under the navigation bar.
pub fn scroll_to_section(id: &str) {
    let Some(el) = document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        log::warn!("no section with id {id}");
        return;
    };
    window().scroll_to_with_x_and_y(0.0, f64::from(el.offset_top()) - NAV_HEIGHT);
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = Theme::new();
    provide_context(theme);
    provide_context(Toaster::new());

    view! {
        <Title formatter=|title| format!("{OWNER} - {title}") />

        <Router>
            <div class=move || {
                format!(
                    "{} min-h-screen bg-background text-foreground transition-colors duration-300",
                    theme.mode.get().as_str(),
                )
            }>
                <Navigation />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=Portfolio />
                    </Routes>
                </main>
                <Footer />
                <CommandPaletteOverlay />
                <PaletteHint />
                <ToastArea />
            </div>
        </Router>
    }
}

/// The single page: every section in scroll order.
#[component]
fn Portfolio() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Skills />
        <Projects />
        <Activity />
        <Experience />
        <Contact />
    }
}

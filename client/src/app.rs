//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{
    company::CompanyPage, dashboard::DashboardPage, home::HomePage, login::LoginPage, search::SearchPage,
    signup::SignupPage,
};
use crate::state::{auth::AuthState, session};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Auth starts out pending because the session lives in browser storage;
/// the effect below resolves it once the app is running in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    provide_context(auth);

    // Effects only run in the browser, so this reads the real storage.
    Effect::new(move || {
        auth.set(AuthState::from_stored(session::load()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/casablanca.css"/>
        <Title text="Casablanca"/>

        <Router>
            <Navbar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("search") view=SearchPage/>
                    <Route path=(StaticSegment("company"), ParamSegment("id")) view=CompanyPage/>
                </Routes>
            </main>
        </Router>
    }
}

//! Page chrome: header with section navigation, footer.

use leptos::*;
use leptos_router::A;

use crate::config::APP_NAME;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <header class="app-header">
                <div class="app-header-inner">
                    <h1 class="app-title">{APP_NAME}</h1>
                    <nav class="app-nav">
                        <A href="/galleries" class="nav-link" active_class="nav-link-active">
                            "Galleries"
                        </A>
                        <A href="/film-stocks" class="nav-link" active_class="nav-link-active">
                            "Film Stock"
                        </A>
                        <A href="/trips" class="nav-link" active_class="nav-link-active">
                            "Trips"
                        </A>
                    </nav>
                </div>
            </header>
            <main class="app-main">{children()}</main>
            <footer class="app-footer">
                <span>"Shot on film, catalogued here."</span>
            </footer>
        </div>
    }
}

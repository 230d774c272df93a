// Verum Omnis landing page - Leptos 0.8 CSR entry point

mod console;

use leptos::prelude::*;
use verum_view::LandingView;

fn main() {
    console_error_panic_hook::set_once();
    console::announce();
    leptos::mount::mount_to_body(|| view! { <LandingView /> });
}

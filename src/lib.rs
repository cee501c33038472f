//! Leptos client-side app wiring and routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// rand's entropy source on wasm32 needs getrandom's `js` backend enabled.
use getrandom as _;

// Modules
mod components;
mod pages;

pub use crate::components::truss_field::{
	Beam, DrawCmd, DrawList, Load, Node, Palette, ScreenPoint, Stroke, Theme, TrussError,
	TrussFieldCanvas, TrussFieldState, TrussParams, Viewport, build_frame,
};
// Top-Level pages
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
	info!("Thanks for checking out the source! Feel free to reach out if you want to collaborate.");
}

/// Theme already set on `<html data-theme=...>` by the page, if any.
fn initial_theme() -> Theme {
	let attr = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.document_element())
		.and_then(|root| root.get_attribute("data-theme"));
	Theme::from_attr(attr.as_deref())
}

/// Mirrors the theme onto `<html data-theme=...>` for the stylesheet.
fn sync_theme_attr(theme: Theme) {
	let Some(root) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.document_element())
	else {
		return;
	};
	if let Err(err) = root.set_attribute("data-theme", theme.as_str()) {
		log::warn!("could not set data-theme: {err:?}");
	}
}

/// An app router which renders the homepage and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	let theme = RwSignal::new(initial_theme());
	provide_context(theme);
	Effect::new(move |_| sync_theme_attr(theme.get()));

	view! {
		<Html attr:lang="en" attr:dir="ltr" />

		// sets the document title
		<Title text="Portfolio" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}

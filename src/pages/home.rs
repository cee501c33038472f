use leptos::prelude::*;

use crate::components::truss_field::{Theme, TrussFieldCanvas};

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let theme = use_context::<RwSignal<Theme>>().unwrap_or_else(|| RwSignal::new(Theme::default()));
	let toggle_label = move || match theme.get() {
		Theme::Light => "Dark mode",
		Theme::Dark => "Light mode",
	};

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<TrussFieldCanvas theme=theme />
			<header class="hero">
				<button
					class="theme-toggle"
					aria-label="Toggle theme"
					on:click=move |_| theme.update(|t| *t = t.toggled())
				>
					{toggle_label}
				</button>
				<h1>"Structural & Aerospace Engineering"</h1>
				<p class="subtitle">"Research, teaching and projects."</p>
			</header>
		</ErrorBoundary>
	}
}

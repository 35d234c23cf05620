use board::ActivityBoard;
use error::ClientError;
use sycamore::futures::spawn_local;
use sycamore::prelude::*;

mod api;
mod banner;
mod board;
mod config;
mod dom;
mod error;
mod outcome;
mod views;

fn log_level() -> log::Level {
	if cfg!(debug_assertions) {
		log::Level::Debug
	} else {
		log::Level::Info
	}
}

fn startup_error_view<G: Html>(ctx: Scope<'_>, message: &'static str, error: &ClientError) -> View<G> {
	let error_display = error.to_string();
	view! {
		ctx,
		div(id="app_error") {
			(message)
			br {}
			(error_display)
		}
	}
}

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::new(log_level()));

	let board = match ActivityBoard::attach() {
		Ok(board) => board,
		Err(error) => {
			log::error!("Unable to attach to the page: {}", error);
			sycamore::render(move |ctx| startup_error_view(ctx, "The activity board could not be loaded.", &error));
			return;
		}
	};

	board.mount();
	spawn_local(async move {
		board.load_and_render().await;
	});
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn startup_error_shows_message_and_cause() {
		let error = ClientError::MissingElement("signup-form");
		let html = sycamore::render_to_string(|ctx| startup_error_view(ctx, "The activity board could not be loaded.", &error));
		assert!(html.contains("id=\"app_error\""));
		assert!(html.contains("The activity board could not be loaded."));
		assert!(html.contains("signup-form"));
	}
}

use tracing_subscriber::{fmt, EnvFilter};

mod app;
mod config;

mod domain {
    pub mod format;
    pub mod entities {
        pub mod date_range;
        pub mod filter_state;
        pub mod quotation;
        pub mod snapshot;
    }
}

mod infra {
    pub mod json {
        pub mod snapshot;
    }
}

mod platform {
    pub mod desktop {
        pub mod notice;
    }
}

mod ui {
    pub mod styles;
    pub mod binding {
        pub mod signal_view;
    }
    pub mod state {
        pub mod app_state;
    }
}

mod usecase {
    pub mod ports {
        pub mod source;
        pub mod view;
    }
    pub mod services {
        pub mod report_controller;
        pub mod snapshot_service;
    }
}


use app::App;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

#[cfg(feature = "desktop")]
fn main() {
    init_tracing();

    let config = config::AppConfig::from_env().expect("should resolve report configuration");
    let webview_data_dir = config
        .ensure_webview_data_dir()
        .expect("should create WebView2 data directory");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title(config.window_title))
                .with_data_directory(webview_data_dir),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    init_tracing();
    dioxus::launch(App);
}

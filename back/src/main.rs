#[allow(unused_imports)]
#[macro_use]
extern crate thiserror;

#[macro_use(trace, debug, info, warn, error)]
extern crate log;

#[macro_use(lazy_static)]
extern crate lazy_static;

mod catchers;
mod config;
mod error;
mod guards;
mod notify;
mod payment;
mod response;
mod routes;
mod state;
#[cfg(test)]
mod testing;

pub async fn build_rocket_with(
    figment: rocket::figment::Figment,
    relay: state::Relay,
) -> Result<rocket::Rocket<rocket::Ignite>, rocket::Error> {
    rocket::custom(figment)
        .manage(relay)
        .register("/", rocket::catchers![catchers::root_404])
        .register(
            "/api",
            rocket::catchers![
                catchers::api_404,
                catchers::api_400,
                catchers::api_413,
                catchers::api_422,
                catchers::api_500,
            ],
        )
        .mount(
            "/",
            rocket::routes![
                routes::root,
                routes::front_js,
                routes::front_bg_wasm,
                routes::index_html,
                routes::favicon_ico,
                routes::static_resource,
                routes::static_css,
                routes::page,
            ],
        )
        .mount(
            "/api",
            rocket::routes![
                routes::create_checkout_session,
                routes::checkout_session,
                routes::manage_subscription,
                routes::webhook,
            ],
        )
        .ignite()
        .await
}

pub async fn build_rocket() -> Result<rocket::Rocket<rocket::Ignite>, rocket::Error> {
    let figment = rocket::Config::figment();

    let relay = state::Relay::from_config(config::PaymentConfig::from_figment(&figment));

    build_rocket_with(figment, relay).await
}

#[rocket::main]
async fn main() {
    let filters = [("rocket", log::LevelFilter::Warn)];
    logger::init([
        logger::Config::default()
            .output(logger::Output::Stdout)
            .colored(true)
            .filters(&filters),
        logger::Config::default()
            .output(logger::Output::new_timed_file(
                "./log/.log",
                std::time::Duration::from_secs(86400), // A day
            ))
            .filters(&filters),
    ]);

    // Small print to show the start of the program log in the file
    trace!(
        "\n╭{line}╮\n│{message:^30}│\n╰{line}╯",
        line = "─".repeat(30),
        message = "Program start"
    );

    let rocket = match build_rocket().await {
        Ok(rocket) => rocket,
        Err(e) => {
            error!("Failed to build the server: {e}");
            std::process::exit(1)
        }
    };

    display_config(
        rocket.config(),
        rocket.state::<state::Relay>().map(|relay| &relay.config),
        rocket.routes(),
        rocket.catchers(),
    );

    if let Err(e) = rocket.launch().await {
        error!("Server stopped unexpectedly: {e}");
        std::process::exit(1)
    }
}

/// Displays the config in the console
fn display_config<'a>(
    rocket_cfg: &rocket::Config,
    payment_cfg: Option<&config::PaymentConfig>,
    rocket_routes: impl Iterator<Item = &'a rocket::Route>,
    rocket_catchers: impl Iterator<Item = &'a rocket::Catcher>,
) {
    let profile = rocket_cfg.profile.as_str().as_str();
    let address = rocket_cfg.address;
    let port = rocket_cfg.port;
    let workers = rocket_cfg.workers;
    // let max_blocking = cfg.max_blocking;
    let indent = rocket_cfg.ident.as_str().unwrap_or("[ERROR] Undefined");
    let ip_headers = rocket_cfg
        .ip_header
        .as_ref()
        .map(|header| header.as_str())
        .unwrap_or("[ERROR] Undefined");
    let limits = ["bytes", "data-form", "file", "json", "msgpack", "string"]
        .iter()
        .map(|limit_name| {
            format!(
                "{limit_name}: {}",
                rocket_cfg
                    .limits
                    .get(limit_name)
                    .unwrap_or(rocket::data::ByteUnit::from(0))
            )
        })
        .collect::<Vec<String>>();
    let keep_alive_s = rocket_cfg.keep_alive;
    let payment = payment_cfg
        .map(|cfg| {
            format!(
                "\n    Provider: {}\n    Secret key: {}\n    Webhook secret: {}\n    Backend: {}\n    Countries: {}",
                cfg.api_base(),
                mask(&cfg.secret_key),
                mask(&cfg.webhook_secret),
                cfg.backend_url(),
                cfg.allowed_countries.join(", ")
            )
        })
        .unwrap_or_else(|| String::from("[ERROR] Undefined"));
    let shutdown_mode = &rocket_cfg.shutdown;

    let routes = rocket_routes
        .map(|route| {
            let uri = route.uri.origin.to_string();
            let name = route
                .name
                .as_ref()
                .map(std::borrow::Cow::as_ref)
                .unwrap_or("[ERROR] Undefined");
            let method = route.method.as_str();
            format!("{method:<5} {uri:<20} {name}")
        })
        .collect::<Vec<String>>();

    let catchers = rocket_catchers
        .map(|catcher| {
            let base = catcher.base.to_string();
            let name = catcher
                .name
                .as_ref()
                .map(std::borrow::Cow::as_ref)
                .unwrap_or("[ERROR] Undefined");
            let code = catcher
                .code
                .map(|code| code.to_string())
                .unwrap_or("[ERROR] Undefined".to_string());

            format!("{code:<5} {base:<20} {name}")
        })
        .collect::<Vec<String>>();

    let display_vec = |data: Vec<String>| -> String {
        use std::fmt::Write as _;
        let mut out = String::new();
        out.push_str("[\n");
        out.push_str(&data.iter().fold(String::new(), |mut output, d| {
            writeln!(output, "    {d}").unwrap(); // Writing to a string cannot fail
            output
        }));
        out.push(']');
        out
    };

    info!("\nConfig:\nUsing profile: {profile}\nAddress: {address}:{port}\nWorkers: {workers}\nIndent: {indent}\nHeaders: {ip_headers}\nLimits: {formatted_limits}\nConnection lifetime: {keep_alive_s}s\nShutdown mode: {shutdown_mode}\nPayment: {payment}\nRoutes: {formatted_routes}\nCatchers: {formatted_catchers}",
        formatted_limits = display_vec(limits),
        formatted_routes = display_vec(routes),
        formatted_catchers = display_vec(catchers)
    );
}

/// Keeps just enough of a secret to tell which one is loaded
fn mask(secret: &str) -> String {
    if secret.is_empty() {
        return String::from("[NOT SET]");
    }

    let visible = secret.chars().take(8).collect::<String>();
    format!("{visible}***")
}

use anyhow::Context as _;
use leptos::prelude::*;

use app::content::ContentStore;

const SERVER_FN_URL_PATH: &str = "/api/{*fn_name}";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use leptos_axum::{generate_route_list, LeptosRoutes};

    env_logger::init();

    let conf = get_configuration(None).context("could not load the leptos configuration")?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    let content_dir = std::env::var("PORTFOLIO_CONTENT_DIR")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::PathBuf::from("content"));
    let ctx = app::context::Context {
        leptos_options: leptos_options.clone(),
        store: ContentStore::new(content_dir),
    };
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(app::App);
    let ctx_fn = {
        let ctx = ctx.clone();
        move || provide_context(ctx.store.clone())
    };
    let app_fn = {
        let ctx = ctx.clone();
        move || app::shell(ctx.leptos_options.clone())
    };

    // The contact section asks for the freshest overrides on every mount,
    // so nothing between it and us may cache the payload.
    let no_store = tower_http::set_header::SetResponseHeaderLayer::overriding(
        axum::http::header::CACHE_CONTROL,
        axum::http::HeaderValue::from_static("no-store"),
    );
    let server_fn_method_router = axum::routing::get(server_fn_axum_handler)
        .post(server_fn_axum_handler)
        .layer(tower::ServiceBuilder::new().layer(no_store));
    let app = axum::Router::new()
        .route(SERVER_FN_URL_PATH, server_fn_method_router)
        .leptos_routes_with_context(&ctx, routes, ctx_fn, app_fn)
        // We could also pass the context to file_and_error_handler
        .fallback(leptos_axum::file_and_error_handler::<app::context::Context, _>(app::shell))
        .with_state(ctx);

    log::info!("listening in {:?} on http://{}", &leptos_options.env, &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("could not bind {addr}"))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("server exited")?;

    Ok(())
}

async fn server_fn_axum_handler(
    axum::extract::State(ctx): axum::extract::State<app::context::Context>,
    request: axum::extract::Request<axum::body::Body>,
) -> impl axum::response::IntoResponse {
    let additional_context = move || {
        provide_context(ctx.store.clone());
    };
    leptos_axum::handle_server_fns_with_context(additional_context, request).await
}

use backend::{
    catchers::{bad_request, internal_error, not_found, unprocessable_entity},
    cors::CORS,
    routes::{
        all_options, create_question, delete_question, list_questions, update_question, AppState,
    },
};
use rocket::{catchers, routes};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[rocket::launch]
fn rocket() -> _ {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🚀 Starting voting question server");

    rocket::build()
        .attach(CORS)
        .manage(AppState::new())
        .mount(
            "/api",
            routes![
                list_questions,
                create_question,
                update_question,
                delete_question,
                all_options
            ],
        )
        .register(
            "/",
            catchers![
                bad_request,
                not_found,
                unprocessable_entity,
                internal_error
            ],
        )
}

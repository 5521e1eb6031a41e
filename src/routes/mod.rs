use actix_web::web;

pub mod backend_health;
pub mod matches;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    // Fixed segments are registered before `/{match_id}` so they win
    cfg.service(
        web::scope("/matches")
            .service(web::resource("").route(web::get().to(matches::list_matches)))
            .service(matches::get_upcoming_matches)
            .service(matches::get_accepting_predictions)
            .service(matches::get_supported_leagues)
            .service(matches::get_match)
    );
}

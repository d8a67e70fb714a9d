use actix_web::web;

use crate::errors::AppError;
use crate::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(web::QueryConfig::default().error_handler(handlers::invalid_list_params))
    .service(web::resource("/").route(web::get().to(handlers::root::root)))
    .service(web::resource("/test").route(web::get().to(handlers::root::diagnostics)))
    .service(
        web::resource("/api/departments")
            .route(web::get().to(handlers::department::list_departments)),
    )
    .service(
        web::resource("/api/departments/{name}")
            .route(web::get().to(handlers::department::get_department)),
    )
    .service(web::resource("/api/news").route(web::get().to(handlers::news::list_news)))
    .service(web::resource("/api/events").route(web::get().to(handlers::event::list_events)))
    .service(
        web::resource("/api/vacancies").route(web::get().to(handlers::vacancy::list_vacancies)),
    )
    .service(
        web::resource("/api/complaints")
            .route(web::post().to(handlers::complaint::submit_complaint)),
    )
    .service(
        web::scope("/api/admin")
            .service(web::resource("/news").route(web::post().to(handlers::news::create_news)))
            .service(
                web::resource("/events").route(web::post().to(handlers::event::create_event)),
            )
            .service(
                web::resource("/vacancies")
                    .route(web::post().to(handlers::vacancy::create_vacancy)),
            )
            .service(
                web::resource("/departments")
                    .route(web::post().to(handlers::department::create_department)),
            )
            .service(
                web::resource("/employees")
                    .route(web::post().to(handlers::employee::create_employee)),
            )
            .service(web::resource("/stats").route(web::get().to(handlers::admin::stats)))
            .service(
                web::resource("/seed-departments")
                    .route(web::post().to(handlers::admin::seed_departments)),
            ),
    );
}

//! Application wiring - builds handlers from ports and assembles the router.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::adapters::http::middleware::USER_ID_HEADER;
use crate::adapters::http::{api_router, ProgressHandlers, RoutineHandlers};
use crate::adapters::storage::{
    FileCompletionStore, InMemoryCompletionStore, InMemoryNotificationStore,
    InMemoryRoutineRepository,
};
use crate::application::handlers::progress::{
    GetProgramOverviewHandler, GetSegmentDetailHandler, ListNotificationsHandler,
    RecordCompletionHandler, ResetProgressHandler,
};
use crate::application::handlers::routine::{
    CreateRoutineHandler, DeleteRoutineHandler, ListRoutinesHandler, ResetRoutineDaysHandler,
    ToggleRoutineDayHandler,
};
use crate::config::{AppConfig, FeatureFlags, ServerConfig, StorageBackend, StorageConfig};
use crate::domain::program::Program;
use crate::ports::{CompletionStore, NotificationStore, RoutineRepository};

/// Ports the HTTP API runs against.
#[derive(Clone)]
pub struct AppDependencies {
    pub program: Arc<Program>,
    pub completions: Arc<dyn CompletionStore>,
    pub routines: Arc<dyn RoutineRepository>,
    pub notifications: Arc<dyn NotificationStore>,
}

impl AppDependencies {
    /// In-memory stores around `program`.
    pub fn in_memory(program: Program) -> Self {
        Self {
            program: Arc::new(program),
            completions: Arc::new(InMemoryCompletionStore::new()),
            routines: Arc::new(InMemoryRoutineRepository::new()),
            notifications: Arc::new(InMemoryNotificationStore::new()),
        }
    }

    /// Stores selected by `storage`.
    pub fn from_config(program: Program, storage: &StorageConfig) -> Self {
        let completions: Arc<dyn CompletionStore> = match storage.backend {
            StorageBackend::Memory => Arc::new(InMemoryCompletionStore::new()),
            StorageBackend::File => Arc::new(FileCompletionStore::new(&storage.data_dir)),
        };
        Self {
            completions,
            ..Self::in_memory(program)
        }
    }
}

/// JSON API routes wired to `deps`, without transport layers.
pub fn build_api(deps: &AppDependencies, features: &FeatureFlags) -> Router {
    let mut record = RecordCompletionHandler::new(deps.program.clone(), deps.completions.clone());
    if features.enable_notifications {
        record = record.with_notifications(deps.notifications.clone());
    }

    let progress = ProgressHandlers::new(
        Arc::new(record),
        Arc::new(ResetProgressHandler::new(
            deps.program.clone(),
            deps.completions.clone(),
        )),
        Arc::new(GetProgramOverviewHandler::new(
            deps.program.clone(),
            deps.completions.clone(),
        )),
        Arc::new(GetSegmentDetailHandler::new(
            deps.program.clone(),
            deps.completions.clone(),
        )),
        Arc::new(ListNotificationsHandler::new(deps.notifications.clone())),
    );

    let routines = RoutineHandlers::new(
        Arc::new(CreateRoutineHandler::new(deps.routines.clone())),
        Arc::new(ListRoutinesHandler::new(deps.routines.clone())),
        Arc::new(ToggleRoutineDayHandler::new(deps.routines.clone())),
        Arc::new(ResetRoutineDaysHandler::new(deps.routines.clone())),
        Arc::new(DeleteRoutineHandler::new(deps.routines.clone())),
    );

    api_router(progress, routines)
}

/// Full application: API plus tracing, CORS and timeout layers.
pub fn build_app(deps: &AppDependencies, config: &AppConfig) -> Router {
    let mut app = build_api(deps, &config.features)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config.server));

    if config.features.enable_tracing {
        app = app.layer(TraceLayer::new_for_http());
    }
    app
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let allow_origin = if origins.is_empty() && !server.is_production() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            HeaderName::from_static(USER_ID_HEADER),
        ])
}

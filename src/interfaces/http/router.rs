//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::booking::{AvailabilityChecker, BookingCoordinator};
use crate::domain::RepositoryProvider;
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::interfaces::http::middleware::{auth_middleware, AuthState};

use super::modules::{auth, guests, health, hotels, managers, reservations, rooms};

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::health_check,
        // Auth
        auth::handlers::register,
        auth::handlers::login,
        auth::handlers::get_current_user,
        auth::handlers::change_password,
        // Hotels
        hotels::handlers::create_hotel,
        hotels::handlers::list_hotels,
        hotels::handlers::get_hotel,
        hotels::handlers::update_hotel,
        hotels::handlers::delete_hotel,
        // Rooms
        rooms::handlers::create_room,
        rooms::handlers::list_rooms,
        rooms::handlers::get_room,
        rooms::handlers::update_room,
        rooms::handlers::delete_room,
        // Managers
        managers::handlers::create_manager,
        managers::handlers::list_managers,
        managers::handlers::get_manager,
        managers::handlers::update_manager,
        managers::handlers::delete_manager,
        // Guests
        guests::handlers::list_guests,
        guests::handlers::get_guest,
        guests::handlers::update_guest,
        guests::handlers::delete_guest,
        // Reservations
        reservations::handlers::create_reservation,
        reservations::handlers::list_reservations,
        reservations::handlers::my_reservations,
        reservations::handlers::get_reservation,
        reservations::handlers::cancel_reservation,
        reservations::handlers::room_availability,
        reservations::handlers::list_room_reservations,
    ),
    components(
        schemas(
            // Common
            crate::interfaces::http::common::EmptyData,
            // Health
            health::handlers::HealthResponse,
            health::handlers::ComponentHealth,
            // Auth
            auth::dto::LoginRequest,
            auth::dto::LoginResponse,
            auth::dto::UserInfo,
            auth::dto::RegisterRequest,
            auth::dto::ChangePasswordRequest,
            // Hotels
            hotels::dto::CreateHotelRequest,
            hotels::dto::UpdateHotelRequest,
            hotels::dto::HotelDto,
            hotels::dto::HotelListResponse,
            // Rooms
            rooms::dto::CreateRoomRequest,
            rooms::dto::UpdateRoomRequest,
            rooms::dto::RoomDto,
            // Managers
            managers::dto::CreateManagerRequest,
            managers::dto::UpdateManagerRequest,
            managers::dto::ManagerDto,
            // Guests
            guests::dto::GuestDto,
            guests::dto::UpdateGuestRequest,
            // Reservations
            reservations::dto::CreateReservationRequest,
            reservations::dto::ReservationDto,
            reservations::dto::AvailabilityDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Authentication", description = "Guest registration, login (JWT), password change"),
        (name = "Hotels", description = "Hotel CRUD operations"),
        (name = "Rooms", description = "Room CRUD and availability search"),
        (name = "Managers", description = "Manager record administration"),
        (name = "Guests", description = "Guest account administration"),
        (name = "Reservations", description = "Room booking, lookup and cancellation"),
    ),
    info(
        title = "Arcadia Hotel API",
        version = "1.0.0",
        description = "REST API for hotel management and room reservations",
        license(name = "MIT"),
        contact(name = "Arcadia", email = "support@arcadia-hotel.example")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    coordinator: Arc<BookingCoordinator>,
    db: DatabaseConnection,
    jwt_config: JwtConfig,
) -> Router {
    let middleware_state = AuthState {
        jwt_config: jwt_config.clone(),
    };

    // ── Per-resource states ────────────────────────────────────

    let health_state = health::HealthState {
        db,
        started_at: Arc::new(Instant::now()),
    };

    let auth_state = auth::AuthHandlerState {
        guests: repos.guests(),
        jwt_config,
    };

    let hotel_state = hotels::HotelAppState {
        hotels: repos.hotels(),
        rooms: repos.rooms(),
    };

    let room_state = rooms::RoomAppState {
        rooms: repos.rooms(),
        hotels: repos.hotels(),
        reservations: repos.reservations(),
        availability: Arc::new(AvailabilityChecker::new(repos.reservations())),
    };

    let manager_state = managers::ManagerAppState {
        managers: repos.managers(),
        hotels: repos.hotels(),
    };

    let guest_state = guests::GuestAppState {
        guests: repos.guests(),
    };

    let reservation_state = reservations::ReservationAppState {
        reservations: repos.reservations(),
        rooms: repos.rooms(),
        guests: repos.guests(),
        coordinator,
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // ── Sub-routers ────────────────────────────────────────────

    // Auth routes (public)
    let auth_routes = Router::new()
        .route("/login", post(auth::handlers::login))
        .route("/register", post(auth::handlers::register))
        .with_state(auth_state.clone());

    // Auth routes (protected)
    let auth_protected_routes = Router::new()
        .route("/me", get(auth::handlers::get_current_user))
        .route("/change-password", put(auth::handlers::change_password))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(auth_state);

    // Hotel routes (public reads)
    let hotel_routes = Router::new()
        .route("/", get(hotels::handlers::list_hotels))
        .route("/{id}", get(hotels::handlers::get_hotel))
        .with_state(hotel_state.clone());

    // Hotel routes (protected writes)
    let hotel_protected_routes = Router::new()
        .route("/", post(hotels::handlers::create_hotel))
        .route(
            "/{id}",
            put(hotels::handlers::update_hotel).delete(hotels::handlers::delete_hotel),
        )
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(hotel_state);

    // Room routes (public reads, including the availability check)
    let room_routes = Router::new()
        .route("/", get(rooms::handlers::list_rooms))
        .route("/{room_id}", get(rooms::handlers::get_room))
        .with_state(room_state.clone());

    let room_availability_routes = Router::new()
        .route(
            "/{room_id}/availability",
            get(reservations::handlers::room_availability),
        )
        .with_state(reservation_state.clone());

    // Room routes (protected writes + reservation listing)
    let room_protected_routes = Router::new()
        .route("/", post(rooms::handlers::create_room))
        .route(
            "/{room_id}",
            put(rooms::handlers::update_room).delete(rooms::handlers::delete_room),
        )
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(room_state);

    let room_reservation_routes = Router::new()
        .route(
            "/{room_id}/reservations",
            get(reservations::handlers::list_room_reservations),
        )
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(reservation_state.clone());

    // Manager routes (protected)
    let manager_routes = Router::new()
        .route(
            "/",
            get(managers::handlers::list_managers).post(managers::handlers::create_manager),
        )
        .route(
            "/{id}",
            get(managers::handlers::get_manager)
                .put(managers::handlers::update_manager)
                .delete(managers::handlers::delete_manager),
        )
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(manager_state);

    // Guest routes (protected)
    let guest_routes = Router::new()
        .route("/", get(guests::handlers::list_guests))
        .route(
            "/{id}",
            get(guests::handlers::get_guest)
                .put(guests::handlers::update_guest)
                .delete(guests::handlers::delete_guest),
        )
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(guest_state);

    // Reservation routes (protected)
    let reservation_routes = Router::new()
        .route(
            "/",
            get(reservations::handlers::list_reservations)
                .post(reservations::handlers::create_reservation),
        )
        .route("/my", get(reservations::handlers::my_reservations))
        .route(
            "/{id}",
            get(reservations::handlers::get_reservation)
                .delete(reservations::handlers::cancel_reservation),
        )
        .layer(middleware::from_fn_with_state(
            middleware_state,
            auth_middleware,
        ))
        .with_state(reservation_state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::handlers::health_check).with_state(health_state))
        // Auth
        .nest("/api/v1/auth", auth_routes)
        .nest("/api/v1/auth", auth_protected_routes)
        // Hotels
        .nest("/api/v1/hotels", hotel_routes)
        .nest("/api/v1/hotels", hotel_protected_routes)
        // Rooms
        .nest("/api/v1/rooms", room_routes)
        .nest("/api/v1/rooms", room_availability_routes)
        .nest("/api/v1/rooms", room_protected_routes)
        .nest("/api/v1/rooms", room_reservation_routes)
        // Managers
        .nest("/api/v1/managers", manager_routes)
        // Guests
        .nest("/api/v1/guests", guest_routes)
        // Reservations
        .nest("/api/v1/reservations", reservation_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

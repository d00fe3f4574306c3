use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, catalog, customer, listing, review, subscription, vendor},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        listing::search_listings,
        listing::get_recommended_listings,
        listing::get_listing_stats,
        listing::get_listing,
        listing::create_listing,
        listing::update_listing,
        listing::delete_listing,
        listing::upload_listing_picture,
        catalog::get_brands,
        catalog::create_brand,
        catalog::get_categories,
        catalog::create_category,
        catalog::get_brand_models,
        catalog::create_brand_model,
        catalog::search_cars,
        catalog::get_car,
        catalog::create_car,
        customer::register_customer,
        customer::get_profile,
        customer::update_profile,
        customer::delete_account,
        customer::get_favorites,
        customer::add_favorite,
        customer::remove_favorite,
        vendor::create_vendor,
        vendor::get_vendor,
        vendor::upload_vendor_logo,
        vendor::register_vendor_user,
        vendor::get_vendor_user_profile,
        vendor::upload_vendor_user_picture,
        review::create_review,
        review::get_customer_reviews,
        review::get_customer_average_rating,
        subscription::create_subscription_package,
        subscription::get_subscription_packages,
    ),
    tags(
        (name = "listing", description = "Marketplace listing search, statistics, and management"),
        (name = "catalog", description = "Brands, categories, models, and catalog cars"),
        (name = "customer", description = "Customer accounts and favorites"),
        (name = "vendor", description = "Dealerships and staff accounts"),
        (name = "review", description = "Customer ratings of catalog cars"),
        (name = "subscription", description = "Vendor posting plans")
    )
)]
struct ApiDoc;

pub fn router(media_dir: &str) -> Router<AppState> {
    Router::new()
        .route("/api/auth/customer/login", post(auth::customer_login))
        .route("/api/auth/vendor/login", post(auth::vendor_login))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/{provider}/login", get(auth::oauth_login))
        .route("/api/auth/callback", get(auth::oauth_callback))
        .route(
            "/api/listings",
            get(listing::search_listings).post(listing::create_listing),
        )
        .route(
            "/api/listings/recommended",
            get(listing::get_recommended_listings),
        )
        .route(
            "/api/listings/stats/{dimension}",
            get(listing::get_listing_stats),
        )
        .route(
            "/api/listings/{id}",
            get(listing::get_listing)
                .put(listing::update_listing)
                .delete(listing::delete_listing),
        )
        .route(
            "/api/listings/{id}/pictures",
            post(listing::upload_listing_picture),
        )
        .route(
            "/api/brands",
            get(catalog::get_brands).post(catalog::create_brand),
        )
        .route(
            "/api/brands/{brand_id}/models",
            get(catalog::get_brand_models).post(catalog::create_brand_model),
        )
        .route(
            "/api/categories",
            get(catalog::get_categories).post(catalog::create_category),
        )
        .route(
            "/api/cars",
            get(catalog::search_cars).post(catalog::create_car),
        )
        .route("/api/cars/{id}", get(catalog::get_car))
        .route("/api/customers", post(customer::register_customer))
        .route(
            "/api/customers/me",
            get(customer::get_profile)
                .put(customer::update_profile)
                .delete(customer::delete_account),
        )
        .route("/api/customers/me/favorites", get(customer::get_favorites))
        .route(
            "/api/customers/me/favorites/{listing_id}",
            post(customer::add_favorite).delete(customer::remove_favorite),
        )
        .route("/api/vendors", post(vendor::create_vendor))
        .route("/api/vendors/{id}", get(vendor::get_vendor))
        .route("/api/vendors/{id}/logo", post(vendor::upload_vendor_logo))
        .route("/api/vendors/users", post(vendor::register_vendor_user))
        .route(
            "/api/vendors/users/me",
            get(vendor::get_vendor_user_profile),
        )
        .route(
            "/api/vendors/users/me/picture",
            post(vendor::upload_vendor_user_picture),
        )
        .route("/api/reviews", post(review::create_review))
        .route("/api/reviews/{customer_id}", get(review::get_customer_reviews))
        .route(
            "/api/reviews/{customer_id}/average",
            get(review::get_customer_average_rating),
        )
        .route(
            "/api/subscriptions",
            get(subscription::get_subscription_packages)
                .post(subscription::create_subscription_package),
        )
        .nest_service("/media", ServeDir::new(media_dir))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
}

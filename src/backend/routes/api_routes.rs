/**
 * API Route Configuration
 *
 * # Routes
 *
 * ## Authentication (public unless noted)
 * - `POST /auth/register`
 * - `GET /auth/check-email`
 * - `POST /auth/login`
 * - `POST /auth/logout`
 * - `POST /auth/refresh`
 * - `POST /auth/find-email`
 * - `POST /auth/find-password`
 * - `GET /auth/me` (protected)
 *
 * ## Comments (protected)
 * - `POST /api/comments`
 * - `GET /api/comments/eatery/{eatery_id}`
 * - `GET /api/comments/member/{member_id}`
 * - `PUT|DELETE /api/comments/{id}`
 *
 * ## Reviews (protected)
 * - `POST /api/reviews`
 * - `GET /api/reviews/eatery/{eatery_id}`
 * - `GET /api/reviews/{id}/images`
 * - `DELETE /api/reviews/{id}`
 *
 * Only the `/auth` routes above are public. Protected routes share one
 * sub-router whose `route_layer` runs `auth_middleware`, so unknown paths
 * still fall through to the 404 fallback instead of answering 401.
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};

use crate::backend::auth::{check_email, find_email, find_password, get_me, login, logout, refresh, register};
use crate::backend::comments::{
    create_comment, delete_comment, list_comments_by_eatery, list_comments_by_member, update_comment,
};
use crate::backend::middleware::auth_middleware;
use crate::backend::reviews::{create_review, delete_review, list_review_images, list_reviews_by_eatery};
use crate::backend::server::state::AppState;

pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/auth/register", post(register))
        .route("/auth/check-email", get(check_email))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/refresh", post(refresh))
        .route("/auth/find-email", post(find_email))
        .route("/auth/find-password", post(find_password))
}

pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/auth/me", get(get_me))
        .route("/api/comments", post(create_comment))
        .route("/api/comments/eatery/{eatery_id}", get(list_comments_by_eatery))
        .route("/api/comments/member/{member_id}", get(list_comments_by_member))
        .route("/api/comments/{id}", put(update_comment).delete(delete_comment))
        .route("/api/reviews", post(create_review))
        .route("/api/reviews/eatery/{eatery_id}", get(list_reviews_by_eatery))
        .route("/api/reviews/{id}/images", get(list_review_images))
        .route("/api/reviews/{id}", delete(delete_review))
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    router.merge(protected)
}

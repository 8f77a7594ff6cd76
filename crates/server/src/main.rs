// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use poll_vote::{Store, SystemClock};
use poll_vote_api::{
    ApiError, AuthenticatedActor, AuthenticationService, CandidateInfo, CastVoteRequest,
    CastVoteResponse, CreateCandidateRequest, CreateElectionRequest, ElectionDetailsResponse,
    ElectionInfo, ElectionResultsResponse, IdentityInfo, ListCandidatesResponse,
    ListElectionsResponse, LoginRequest, LogoutResponse, VoteStatusResponse, cast_vote,
    create_candidate, create_election, get_election, get_results, get_vote_status,
    list_candidates, list_elections, login, logout, whoami,
};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Poll Vote Server - HTTP server for the Poll Vote system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: IpAddr,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Start with an empty store instead of the sample elections
    #[arg(long)]
    empty: bool,
}

/// Application state shared across handlers.
///
/// Mutating operations hold the write lock for the whole store call, so
/// ballots and session changes are serialized. Queries share the read lock.
#[derive(Clone)]
struct AppState {
    /// The election store.
    store: Arc<RwLock<Store>>,
}

impl AppState {
    fn new(store: Store) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

/// Query parameters for listing elections.
#[derive(Debug, Deserialize)]
struct ListElectionsQuery {
    /// `all`, `active`, `upcoming` or `past`.
    status: Option<String>,
}

/// Query parameters for vote status.
#[derive(Debug, Deserialize)]
struct VoteStatusQuery {
    /// The voter to check; defaults to the logged-in identity.
    voter_id: Option<String>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
        };
        warn!(status = %status, error = %err, "Request failed");
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Resolves the logged-in identity into an actor.
fn current_actor(store: &Store) -> Result<AuthenticatedActor, HttpError> {
    AuthenticationService::current_actor(store).map_err(|err| HttpError::from(ApiError::from(err)))
}

/// Handler for POST `/login` endpoint.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<IdentityInfo>, HttpError> {
    info!(email = %request.email, "Handling login request");

    let mut store = app_state.store.write().await;
    let identity: IdentityInfo = login(&mut store, &request)?;

    Ok(Json(identity))
}

/// Handler for POST `/logout` endpoint.
async fn handle_logout(AxumState(app_state): AxumState<AppState>) -> Json<LogoutResponse> {
    info!("Handling logout request");

    let mut store = app_state.store.write().await;
    Json(logout(&mut store))
}

/// Handler for GET `/whoami` endpoint.
async fn handle_whoami(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<IdentityInfo>, HttpError> {
    info!("Handling whoami request");

    let store = app_state.store.read().await;
    Ok(Json(whoami(&store)?))
}

/// Handler for GET `/elections` endpoint.
///
/// Lists elections, optionally filtered by `?status=`.
async fn handle_list_elections(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListElectionsQuery>,
) -> Result<Json<ListElectionsResponse>, HttpError> {
    info!(status = ?query.status, "Handling list_elections request");

    let store = app_state.store.read().await;
    Ok(Json(list_elections(&store, query.status.as_deref())?))
}

/// Handler for POST `/elections` endpoint.
async fn handle_create_election(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<CreateElectionRequest>,
) -> Result<Json<ElectionInfo>, HttpError> {
    info!(name = %request.name, "Handling create_election request");

    let mut store = app_state.store.write().await;
    let actor: AuthenticatedActor = current_actor(&store)?;
    let election: ElectionInfo = create_election(&mut store, &request, &actor)?;

    Ok(Json(election))
}

/// Handler for GET `/elections/{election_id}` endpoint.
async fn handle_get_election(
    AxumState(app_state): AxumState<AppState>,
    Path(election_id): Path<String>,
) -> Result<Json<ElectionDetailsResponse>, HttpError> {
    info!(election_id = %election_id, "Handling get_election request");

    let store = app_state.store.read().await;
    Ok(Json(get_election(&store, &election_id)?))
}

/// Handler for GET `/elections/{election_id}/candidates` endpoint.
async fn handle_list_candidates(
    AxumState(app_state): AxumState<AppState>,
    Path(election_id): Path<String>,
) -> Result<Json<ListCandidatesResponse>, HttpError> {
    info!(election_id = %election_id, "Handling list_candidates request");

    let store = app_state.store.read().await;
    Ok(Json(list_candidates(&store, &election_id)?))
}

/// Handler for POST `/elections/{election_id}/candidates` endpoint.
async fn handle_create_candidate(
    AxumState(app_state): AxumState<AppState>,
    Path(election_id): Path<String>,
    Json(request): Json<CreateCandidateRequest>,
) -> Result<Json<CandidateInfo>, HttpError> {
    info!(election_id = %election_id, name = %request.name, "Handling create_candidate request");

    let mut store = app_state.store.write().await;
    let actor: AuthenticatedActor = current_actor(&store)?;
    let candidate: CandidateInfo = create_candidate(&mut store, &election_id, &request, &actor)?;

    Ok(Json(candidate))
}

/// Handler for POST `/elections/{election_id}/votes` endpoint.
async fn handle_cast_vote(
    AxumState(app_state): AxumState<AppState>,
    Path(election_id): Path<String>,
    Json(request): Json<CastVoteRequest>,
) -> Result<Json<CastVoteResponse>, HttpError> {
    info!(
        election_id = %election_id,
        voter_id = %request.voter_id,
        "Handling cast_vote request"
    );

    let mut store = app_state.store.write().await;
    let actor: AuthenticatedActor = current_actor(&store)?;
    let response: CastVoteResponse = cast_vote(&mut store, &election_id, &request, &actor)?;

    Ok(Json(response))
}

/// Handler for GET `/elections/{election_id}/results` endpoint.
async fn handle_get_results(
    AxumState(app_state): AxumState<AppState>,
    Path(election_id): Path<String>,
) -> Result<Json<ElectionResultsResponse>, HttpError> {
    info!(election_id = %election_id, "Handling get_results request");

    let store = app_state.store.read().await;
    Ok(Json(get_results(&store, &election_id)?))
}

/// Handler for GET `/elections/{election_id}/vote_status` endpoint.
async fn handle_get_vote_status(
    AxumState(app_state): AxumState<AppState>,
    Path(election_id): Path<String>,
    Query(query): Query<VoteStatusQuery>,
) -> Result<Json<VoteStatusResponse>, HttpError> {
    info!(
        election_id = %election_id,
        voter_id = ?query.voter_id,
        "Handling get_vote_status request"
    );

    let store = app_state.store.read().await;
    Ok(Json(get_vote_status(
        &store,
        &election_id,
        query.voter_id.as_deref(),
    )?))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/login", post(handle_login))
        .route("/logout", post(handle_logout))
        .route("/whoami", get(handle_whoami))
        .route(
            "/elections",
            get(handle_list_elections).post(handle_create_election),
        )
        .route("/elections/{election_id}", get(handle_get_election))
        .route(
            "/elections/{election_id}/candidates",
            get(handle_list_candidates).post(handle_create_candidate),
        )
        .route("/elections/{election_id}/votes", post(handle_cast_vote))
        .route("/elections/{election_id}/results", get(handle_get_results))
        .route(
            "/elections/{election_id}/vote_status",
            get(handle_get_vote_status),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Poll Vote Server");

    let store: Store = if args.empty {
        info!("Starting with an empty store");
        Store::new()
    } else {
        info!("Loading sample elections");
        Store::with_sample_data(SystemClock)?
    };

    let app: Router = build_router(AppState::new(store));

    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

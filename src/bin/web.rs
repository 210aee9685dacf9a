//! Single binary web server: REST API for rosters, team generation, and ranking.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use hockey_roster_web::{
    apply_rankings_to_players, calculate_final_rankings, calculate_team_stats, generate_teams,
    parse_roster_csv, record_result, reset_tournament, start_tournament, Matchup, Player,
    TeamStats, Teams, TournamentSession,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Per-group entry: roster + ranking session + last activity time (for auto-cleanup).
struct GroupEntry {
    players: Vec<Player>,
    session: TournamentSession,
    last_activity: Instant,
}

impl GroupEntry {
    fn new() -> Self {
        Self {
            players: Vec::new(),
            session: TournamentSession::new(),
            last_activity: Instant::now(),
        }
    }
}

/// In-memory state: rosters by group code. Entries are removed after 12h inactivity.
type AppState = Data<RwLock<HashMap<String, GroupEntry>>>;

/// Inactivity threshold: groups not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct AddPlayerBody {
    first_name: String,
    last_name: String,
    skill: i32,
    is_defense: bool,
    #[serde(default = "default_attending")]
    is_attending: bool,
}

fn default_attending() -> bool {
    true
}

#[derive(Deserialize)]
struct UpdatePlayerBody {
    skill: Option<i32>,
    is_defense: Option<bool>,
    is_attending: Option<bool>,
}

#[derive(Deserialize)]
struct RecordResultBody {
    matchup_id: Uuid,
    winner: String,
}

/// Path segment: group code (e.g. /api/groups/{code})
#[derive(Deserialize)]
struct GroupPath {
    code: String,
}

/// Path segments: group code and player id (e.g. /api/groups/{code}/players/{player_id})
#[derive(Deserialize)]
struct GroupPlayerPath {
    code: String,
    player_id: Uuid,
}

/// Team generation response: the split plus per-team stats.
#[derive(Serialize)]
struct TeamsResponse {
    teams: Teams,
    red_stats: TeamStats,
    white_stats: TeamStats,
}

/// Tournament view: session plus the derived current matchup.
#[derive(Serialize)]
struct SessionResponse {
    session: TournamentSession,
    current_matchup: Option<Matchup>,
}

impl SessionResponse {
    fn from_session(session: &TournamentSession) -> Self {
        Self {
            current_matchup: session.current_matchup().cloned(),
            session: session.clone(),
        }
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "hockey-roster-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Add a player to a group's roster (the group is created on first add).
#[post("/api/groups/{code}/players")]
async fn api_add_player(state: AppState, path: Path<GroupPath>, body: Json<AddPlayerBody>) -> HttpResponse {
    if body.first_name.trim().is_empty() && body.last_name.trim().is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": "Player name is empty" }));
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = g.entry(path.code.clone()).or_insert_with(GroupEntry::new);
    entry.last_activity = Instant::now();
    let mut p = Player::new(
        body.first_name.trim(),
        body.last_name.trim(),
        body.skill,
        body.is_defense,
    );
    p.is_attending = body.is_attending;
    entry.players.push(p);
    HttpResponse::Ok().json(&entry.players)
}

/// List a group's roster (404 if the group does not exist).
#[get("/api/groups/{code}/players")]
async fn api_list_players(state: AppState, path: Path<GroupPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.code) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(&entry.players)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No group" })),
    }
}

/// Update a player's skill, position, or attendance.
#[put("/api/groups/{code}/players/{player_id}")]
async fn api_update_player(
    state: AppState,
    path: Path<GroupPlayerPath>,
    body: Json<UpdatePlayerBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.code) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No group" })),
    };
    entry.last_activity = Instant::now();
    let p = match entry.players.iter_mut().find(|p| p.id == path.player_id) {
        Some(p) => p,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No player" })),
    };
    if let Some(skill) = body.skill {
        p.skill = skill;
    }
    if let Some(is_defense) = body.is_defense {
        p.is_defense = is_defense;
    }
    if let Some(is_attending) = body.is_attending {
        p.is_attending = is_attending;
    }
    HttpResponse::Ok().json(&entry.players)
}

/// Remove a player from the roster.
#[delete("/api/groups/{code}/players/{player_id}")]
async fn api_remove_player(state: AppState, path: Path<GroupPlayerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.code) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No group" })),
    };
    entry.last_activity = Instant::now();
    let before = entry.players.len();
    entry.players.retain(|p| p.id != path.player_id);
    if entry.players.len() == before {
        return HttpResponse::NotFound().json(serde_json::json!({ "error": "No player" }));
    }
    HttpResponse::Ok().json(&entry.players)
}

/// Import players from a CSV body (all-or-nothing; group created on first import).
#[post("/api/groups/{code}/players/import")]
async fn api_import_players(state: AppState, path: Path<GroupPath>, body: String) -> HttpResponse {
    let imported = match parse_roster_csv(&body) {
        Ok(players) => players,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
        }
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = g.entry(path.code.clone()).or_insert_with(GroupEntry::new);
    entry.last_activity = Instant::now();
    entry.players.extend(imported);
    HttpResponse::Ok().json(&entry.players)
}

/// Generate the two-team split from attending players, with per-team stats.
#[post("/api/groups/{code}/teams/generate")]
async fn api_generate_teams(state: AppState, path: Path<GroupPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.code) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No group" })),
    };
    entry.last_activity = Instant::now();
    let teams = generate_teams(&entry.players);
    let red_stats = calculate_team_stats(&teams.red);
    let white_stats = calculate_team_stats(&teams.white);
    HttpResponse::Ok().json(TeamsResponse {
        teams,
        red_stats,
        white_stats,
    })
}

/// Start a ranking session over the group's roster (session must be in Setup).
#[post("/api/groups/{code}/tournament/start")]
async fn api_tournament_start(state: AppState, path: Path<GroupPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.code) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No group" })),
    };
    entry.last_activity = Instant::now();
    let players = entry.players.clone();
    match start_tournament(&mut entry.session, &players) {
        Ok(()) => HttpResponse::Ok().json(SessionResponse::from_session(&entry.session)),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Get the group's ranking session, including the current matchup.
#[get("/api/groups/{code}/tournament")]
async fn api_tournament_get(state: AppState, path: Path<GroupPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.code) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(SessionResponse::from_session(&entry.session))
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No group" })),
    }
}

/// Record the winner of one matchup.
#[post("/api/groups/{code}/tournament/result")]
async fn api_tournament_record(
    state: AppState,
    path: Path<GroupPath>,
    body: Json<RecordResultBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.code) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No group" })),
    };
    entry.last_activity = Instant::now();
    match record_result(&mut entry.session, body.matchup_id, &body.winner) {
        Ok(()) => HttpResponse::Ok().json(SessionResponse::from_session(&entry.session)),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Get final rankings (all matchups must be resolved).
#[get("/api/groups/{code}/tournament/rankings")]
async fn api_tournament_rankings(state: AppState, path: Path<GroupPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.code) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No group" })),
    };
    entry.last_activity = Instant::now();
    match calculate_final_rankings(&entry.session) {
        Ok(rankings) => HttpResponse::Ok().json(rankings),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Apply final rankings to the roster: overwrites skill values from rank.
#[post("/api/groups/{code}/tournament/apply")]
async fn api_tournament_apply(state: AppState, path: Path<GroupPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.code) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No group" })),
    };
    entry.last_activity = Instant::now();
    match apply_rankings_to_players(&entry.session, &entry.players) {
        Ok(updated) => {
            entry.players = updated;
            HttpResponse::Ok().json(&entry.players)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Reset the ranking session back to Setup.
#[post("/api/groups/{code}/tournament/reset")]
async fn api_tournament_reset(state: AppState, path: Path<GroupPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.code) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No group" })),
    };
    entry.last_activity = Instant::now();
    reset_tournament(&mut entry.session);
    HttpResponse::Ok().json(SessionResponse::from_session(&entry.session))
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<String, GroupEntry>::new()));

    // Background task: every 30 minutes, remove groups inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive group(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(favicon)
            .service(api_add_player)
            .service(api_list_players)
            .service(api_update_player)
            .service(api_remove_player)
            .service(api_import_players)
            .service(api_generate_teams)
            .service(api_tournament_start)
            .service(api_tournament_get)
            .service(api_tournament_record)
            .service(api_tournament_rankings)
            .service(api_tournament_apply)
            .service(api_tournament_reset)
    })
    .bind(bind)?
    .run()
    .await
}

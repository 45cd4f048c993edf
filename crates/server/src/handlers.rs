use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::error;
use actix_web::web;
use hpb_agent::*;
use hpb_cards::*;
use hpb_dto::*;
use rand::Rng;

pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::default())
}

pub async fn get_action(agent: web::Data<Agent>, req: web::Json<ActionRequest>) -> impl Responder {
    log::debug!("received state {:?}", req);
    match respond(&agent, &req, &mut rand::rng()) {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(e) => {
            log::error!("decision failed: {:#}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(e))
        }
    }
}

/// Unreadable bodies are internal failures, not client errors.
pub fn malformed(e: error::JsonPayloadError, _: &HttpRequest) -> actix_web::Error {
    log::error!("unreadable request body: {}", e);
    let body = HttpResponse::InternalServerError().json(ErrorResponse::new(&e));
    error::InternalError::from_response(e, body).into()
}

/// Runs one request through the agent. An empty menu folds without
/// consulting it.
pub fn respond<R>(agent: &Agent, req: &ActionRequest, rng: &mut R) -> anyhow::Result<ActionResponse>
where
    R: Rng + ?Sized,
{
    if req.legal_actions.is_empty() {
        log::info!("no legal actions offered, folding");
        return Ok(ActionResponse::fold());
    }
    if req.player_id.is_some() || req.position.is_some() {
        log::info!(
            "deciding for player {} at position {} of {}",
            display(&req.player_id),
            display(&req.position),
            display(&req.num_players),
        );
    }
    let table = tabulate(req);
    log::debug!("{}", table);
    let reply = agent.act(&table, rng)?;
    log::info!("responding {}", reply);
    Ok(ActionResponse {
        action: reply.action().to_string(),
        amount: Some(reply.amount()),
    })
}

/// Decodes the wire payload into the agent's view of the spot.
pub fn tabulate(req: &ActionRequest) -> Table {
    Table {
        hole: Wire::decode_all(req.hole_tokens()),
        board: Wire::decode_all(req.board_tokens()),
        pot: req.pot,
        current_bet: req.current_bet,
        player_bet: req.player_current_bet,
        chips: req.chips,
        min_raise: req.min_raise,
        menu: Menu::from(req.legal_actions.as_slice()),
    }
}

fn display(value: &Option<serde_json::Value>) -> String {
    value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| String::from("?"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::App;
    use actix_web::http::StatusCode;
    use actix_web::http::header::ContentType;
    use actix_web::test;
    use serde_json::Value;
    use serde_json::json;

    async fn post(body: Value) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Agent::default()))
                .configure(crate::configure),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/get_action")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn health_reports_ok() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Agent::default()))
                .configure(crate::configure),
        )
        .await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[actix_web::test]
    async fn unknown_hand_checks() {
        let (status, body) = post(json!({
            "legal_actions": ["fold", "check"],
            "hand": [],
            "public_cards": []
        }))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["action"], "check");
    }

    #[actix_web::test]
    async fn pocket_aces_raise_pot() {
        let (status, body) = post(json!({
            "legal_actions": ["fold", "check", "call", "raise", "all-in"],
            "hand": ["SA", "HA"],
            "public_cards": [],
            "pot": 100,
            "current_bet": 0,
            "player_current_bet": 0,
            "chips": 1000,
            "min_raise": 20
        }))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"action": "raise", "amount": 100}));
    }

    #[actix_web::test]
    async fn empty_menu_folds_without_amount() {
        let (status, body) = post(json!({"legal_actions": [], "hand": ["SA", "HA"]})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"action": "fold"}));
        let (status, body) = post(json!({})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"action": "fold"}));
    }

    #[actix_web::test]
    async fn half_pot_raise_amount() {
        let (status, body) = post(json!({
            "legal_actions": ["fold", "call", "raise"],
            "hand": ["SK", "HK"],
            "pot": 100,
            "current_bet": 0,
            "chips": 60,
            "min_raise": 20
        }))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"action": "raise", "amount": 50}));
    }

    #[actix_web::test]
    async fn river_nuts_go_all_in() {
        let (status, body) = post(json!({
            "legal_actions": ["fold", "call", "raise", "all-in"],
            "hand": ["h10", "HA"],
            "public_cards": ["HK", "HQ", "HJ", "C2", "D3"],
            "pot": 500,
            "current_bet": 100,
            "player_current_bet": 0,
            "chips": 900.0,
            "min_raise": 100
        }))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"action": "all-in", "amount": 0}));
    }

    #[actix_web::test]
    async fn enormous_chip_counts_still_answer() {
        let (status, body) = post(json!({
            "legal_actions": ["fold", "call", "raise", "all-in"],
            "hand": ["SK", "HK"],
            "pot": 1e30,
            "current_bet": 1e30,
            "player_current_bet": -1e30,
            "chips": 1e30,
            "min_raise": 1e30
        }))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"action": "raise", "amount": i64::MAX}));
    }

    #[actix_web::test]
    async fn malformed_cards_are_skipped() {
        let (status, body) = post(json!({
            "legal_actions": ["fold", "check"],
            "hand": ["XX", "SA", "", null],
            "public_cards": []
        }))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["action"], "check");
    }

    #[actix_web::test]
    async fn impossible_board_is_an_error() {
        let (status, body) = post(json!({
            "legal_actions": ["fold", "check"],
            "hand": ["SA", "HA"],
            "public_cards": ["D2", "C9"]
        }))
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn unreadable_body_is_an_error() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Agent::default()))
                .configure(crate::configure),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/get_action")
            .insert_header(ContentType::json())
            .set_payload("{\"legal_actions\": [")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn tabulate_decodes_wire_cards() {
        let req = ActionRequest {
            legal_actions: vec![String::from("fold"), String::from("call")],
            hand: vec![Some(String::from("H10")), Some(String::from("sa"))],
            public_cards: vec![Some(String::from("D2")), None, Some(String::from("Z9"))],
            current_bet: 40,
            player_current_bet: 10,
            ..ActionRequest::default()
        };
        let table = tabulate(&req);
        assert_eq!(table.hole, Card::parse("Th As").unwrap());
        assert_eq!(table.board, Card::parse("2d").unwrap());
        assert_eq!(table.call_cost(), 30);
        assert!(table.menu.contains(Move::Call));
        assert!(!table.menu.contains(Move::Check));
    }
}

use super::*;

pub mod prelude {

    use crate::web::{self, api};
    use imt_core::gateways::entity::EntityGateway;

    pub use crate::web::tests::prelude::*;

    pub fn setup() -> Client {
        web::tests::rocket_test_setup(vec![("/", api::routes())])
    }

    pub fn setup_with_gateway(entities: Box<dyn EntityGateway + Send + Sync>) -> Client {
        web::tests::rocket_test_setup_with_gateway(vec![("/", api::routes())], entities)
    }

    pub fn test_json(r: &LocalResponse) {
        assert_eq!(
            r.headers().get("Content-Type").collect::<Vec<_>>()[0],
            "application/json"
        );
    }

    pub fn login_tokens(client: &Client) -> imt_boundary::TokenPair {
        let res = client
            .post("/login")
            .header(ContentType::JSON)
            .body(r#"{"email":"demo@demo.com","password":"1234"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        serde_json::from_str(&res.into_string().unwrap()).unwrap()
    }

    pub fn bearer(token: &str) -> Header<'static> {
        Header::new("Authorization", format!("Bearer {token}"))
    }
}

use self::prelude::*;

#[test]
fn login_returns_a_distinct_token_pair() {
    let client = setup();
    let res = client
        .post("/login")
        .header(ContentType::JSON)
        .body(r#"{"email":"demo@demo.com","password":"1234"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    test_json(&res);
    let tokens: json::TokenPair = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert!(!tokens.access_token.is_empty());
    assert!(!tokens.refresh_token.is_empty());
    assert_ne!(tokens.access_token, tokens.refresh_token);
    assert_eq!(tokens.token_type, "bearer");
}

#[test]
fn login_with_wrong_password_is_unauthorized() {
    let client = setup();
    let res = client
        .post("/login")
        .header(ContentType::JSON)
        .body(r#"{"email":"demo@demo.com","password":"12345"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);
}

#[test]
fn login_with_a_malformed_email_is_a_bad_request() {
    let client = setup();
    let res = client
        .post("/login")
        .header(ContentType::JSON)
        .body(r#"{"email":"","password":"1234"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
}

#[test]
fn refresh_issues_a_new_token_pair() {
    let client = setup();
    let tokens = login_tokens(&client);
    let res = client
        .post("/refresh")
        .header(ContentType::JSON)
        .body(format!(
            "{{\"refresh_token\":\"{}\"}}",
            tokens.refresh_token
        ))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let refreshed: json::TokenPair = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert!(!refreshed.access_token.is_empty());
    assert!(!refreshed.refresh_token.is_empty());
}

#[test]
fn refresh_rejects_an_access_token() {
    let client = setup();
    let tokens = login_tokens(&client);
    let res = client
        .post("/refresh")
        .header(ContentType::JSON)
        .body(format!("{{\"refresh_token\":\"{}\"}}", tokens.access_token))
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);
}

#[test]
fn protected_routes_require_an_access_token() {
    let client = setup();

    // No token at all
    let res = client.get("/categories").dispatch();
    assert_eq!(res.status(), Status::Unauthorized);

    let tokens = login_tokens(&client);

    // A refresh token must not pass as an access token
    let res = client
        .get("/categories")
        .header(bearer(&tokens.refresh_token))
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);

    let res = client
        .get("/categories")
        .header(bearer(&tokens.access_token))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
}

#[test]
fn categories_are_listed_with_their_poi_counts() {
    let client = setup();
    let tokens = login_tokens(&client);
    let res = client
        .get("/categories")
        .header(bearer(&tokens.access_token))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    test_json(&res);
    let categories: Vec<json::Category> =
        serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].id, "castles");
    assert_eq!(categories[0].title, "Κάστρα");
    assert_eq!(categories[0].count, 2);
    assert_eq!(categories[1].id, "museums");
    assert_eq!(categories[1].count, 1);
}

#[test]
fn pois_of_an_unknown_category_are_not_found() {
    let client = setup();
    let tokens = login_tokens(&client);
    let res = client
        .get("/categories/nature/pois")
        .header(bearer(&tokens.access_token))
        .dispatch();
    assert_eq!(res.status(), Status::NotFound);
}

#[test]
fn pois_are_enriched_from_the_knowledge_base() {
    let client = setup();
    let tokens = login_tokens(&client);
    let res = client
        .get("/categories/castles/pois")
        .header(bearer(&tokens.access_token))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let pois: Vec<json::PoiSummary> = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(pois.len(), 2);

    let castle = &pois[0];
    assert_eq!(castle.id, "veria-castle");
    assert_eq!(castle.title, "Κάστρο της Βέροιας");
    assert_eq!(castle.short.as_deref(), Some("Byzantine fortification"));
    assert_eq!(castle.lat, 40.524);
    assert_eq!(castle.lon, 22.202);
    let image = castle.image.as_deref().unwrap();
    assert!(image.contains("1000px-Veria_Castle.jpg"));

    let tower = &pois[1];
    assert_eq!(tower.title, "White Tower");
    assert_eq!(tower.lat, 0.0);
    assert_eq!(tower.lon, 0.0);
    assert!(tower.image.is_none());
}

#[test]
fn unlinked_pois_are_served_from_local_metadata() {
    let client = setup();
    let tokens = login_tokens(&client);
    let res = client
        .get("/categories/museums/pois")
        .header(bearer(&tokens.access_token))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let pois: Vec<json::PoiSummary> = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(pois.len(), 1);
    assert_eq!(pois[0].title, "Λαογραφικό Μουσείο");
    assert_eq!(pois[0].lat, 0.0);
    assert!(pois[0].image.is_none());
}

#[test]
fn poi_details_are_assembled_from_catalog_and_knowledge_base() {
    let client = setup();
    let tokens = login_tokens(&client);
    let res = client
        .get("/pois/veria-castle")
        .header(bearer(&tokens.access_token))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    test_json(&res);
    let details: json::PoiDetails = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(details.id, "veria-castle");
    assert_eq!(details.category_id, "castles");
    assert_eq!(details.category_title, "Κάστρα");
    assert_eq!(details.title, "Κάστρο της Βέροιας");
    assert_eq!(
        details.wikipedia_url.as_deref(),
        Some("https://el.wikipedia.org/wiki/Veria")
    );
    assert_eq!(details.images.len(), 3);
    assert!(details.images[0].contains("1000px-Veria_Castle.jpg"));
    assert_eq!(
        details.description.as_deref(),
        Some("Τα βυζαντινά τείχη της πόλης.")
    );
}

#[test]
fn poi_details_without_a_primary_image_still_list_three_images() {
    let client = setup();
    let tokens = login_tokens(&client);
    let res = client
        .get("/pois/white-tower")
        .header(bearer(&tokens.access_token))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let details: json::PoiDetails = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(details.images.len(), 3);
    assert!(details.images[0].starts_with("https://placeholder.example/"));
}

#[test]
fn details_of_an_unknown_poi_are_not_found() {
    let client = setup();
    let tokens = login_tokens(&client);
    let res = client
        .get("/pois/acropolis")
        .header(bearer(&tokens.access_token))
        .dispatch();
    assert_eq!(res.status(), Status::NotFound);
}

#[test]
fn details_of_an_unlinked_poi_are_a_bad_request() {
    let client = setup();
    let tokens = login_tokens(&client);
    let res = client
        .get("/pois/local-museum")
        .header(bearer(&tokens.access_token))
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
}

#[test]
fn upstream_failures_are_a_bad_gateway() {
    let client = setup_with_gateway(Box::new(FailingEntityGw));
    let tokens = login_tokens(&client);
    let res = client
        .get("/pois/veria-castle")
        .header(bearer(&tokens.access_token))
        .dispatch();
    assert_eq!(res.status(), Status::BadGateway);

    let res = client
        .get("/categories/castles/pois")
        .header(bearer(&tokens.access_token))
        .dispatch();
    assert_eq!(res.status(), Status::BadGateway);
}

#[test]
fn about_and_version_are_public() {
    let client = setup();

    let res = client.get("/about").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let members: Vec<json::AboutMember> =
        serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].full_name, "Jane Doe");

    let res = client.get("/version").dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert_eq!(res.into_string().unwrap(), DUMMY_VERSION);
}

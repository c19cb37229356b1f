use super::*;

#[get("/version")]
pub fn get_version(version: &State<Version>) -> &'static str {
    version.0
}

#[get("/about", format = "application/json")]
pub fn get_about(cfg: &State<Cfg>) -> Json<Vec<json::AboutMember>> {
    Json(cfg.team.iter().map(to_json::about_member).collect())
}

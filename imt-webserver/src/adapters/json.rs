pub use imt_boundary::*;

use crate::web::TeamMember;
use imt_core::{entities as e, usecases};

pub mod to_json {
    //! Entity -> JSON

    use super::*;

    pub fn category((category, poi_count): (e::Category, usize)) -> Category {
        let e::Category { id, title } = category;
        Category {
            id: id.into(),
            title,
            count: poi_count,
        }
    }

    pub fn poi_summary(from: usecases::EnrichedPoi) -> PoiSummary {
        let usecases::EnrichedPoi {
            id,
            title,
            short,
            pos,
            image_url,
            wikipedia_url: _,
        } = from;
        PoiSummary {
            id: id.into(),
            title,
            lat: pos.lat,
            lon: pos.lon,
            short,
            image: image_url.map(|url| url.to_string()),
        }
    }

    pub fn poi_details(from: usecases::PoiDetails) -> PoiDetails {
        let usecases::PoiDetails {
            id,
            category_id,
            category_title,
            title,
            short,
            pos,
            wikipedia_url,
            images,
            description,
        } = from;
        PoiDetails {
            id: id.into(),
            category_id: category_id.into(),
            category_title,
            title,
            short,
            lat: pos.lat,
            lon: pos.lon,
            wikipedia_url: wikipedia_url.map(|url| url.to_string()),
            images: images.into_iter().map(|url| url.to_string()).collect(),
            description,
        }
    }

    pub fn about_member(from: &TeamMember) -> AboutMember {
        let TeamMember {
            full_name,
            member_id,
        } = from;
        AboutMember {
            full_name: full_name.clone(),
            member_id: member_id.clone(),
        }
    }
}

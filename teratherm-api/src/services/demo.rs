//! Degraded mode for the case-study listing.
//!
//! When live storage cannot answer, the listing still shows four fixed
//! showcase projects so the site never renders an empty portfolio.

use crate::models::{CaseStudy, CaseStudyCategory};
use crate::services::store::StorageError;

fn demo(
    id: &str,
    title: &str,
    category: CaseStudyCategory,
    summary: &str,
    image_url: &str,
) -> CaseStudy {
    CaseStudy {
        id: id.to_string(),
        title: title.to_string(),
        category,
        location: None,
        summary: Some(summary.to_string()),
        metrics: None,
        image_url: Some(image_url.to_string()),
    }
}

pub fn demo_case_studies() -> Vec<CaseStudy> {
    vec![
        demo(
            "demo-cannes-villa",
            "Cannes Villa",
            CaseStudyCategory::Domestic,
            "Heating, cooling, pool, DHW.",
            "/images/cannes.jpg",
        ),
        demo(
            "demo-uk-helipad-estate",
            "UK Helipad Estate",
            CaseStudyCategory::Mixed,
            "Helipad, hangar, pool, spa.",
            "/images/helipad.jpg",
        ),
        demo(
            "demo-stadium-project",
            "Stadium Project",
            CaseStudyCategory::Commercial,
            "Large-scale commercial.",
            "/images/stadium.jpg",
        ),
        demo(
            "demo-rawmarsh-sandhill-academy",
            "Rawmarsh Sandhill Academy",
            CaseStudyCategory::Education,
            "ROI-led project.",
            "/images/rawmarsh.jpg",
        ),
    ]
}

/// The single live-vs-demo decision point.
///
/// Any storage failure yields the full demo set. The requested category is
/// deliberately not applied to it.
pub fn case_studies_or_demo(live: Result<Vec<CaseStudy>, StorageError>) -> Vec<CaseStudy> {
    match live {
        Ok(records) => records,
        Err(StorageError::Unavailable) => {
            tracing::warn!("Database not configured, serving demo case studies");
            demo_case_studies()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Case study query failed, serving demo case studies");
            demo_case_studies()
        }
    }
}

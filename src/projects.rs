use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub year: &'static str,
    pub image: &'static str,
    pub link: &'static str,
}

pub static PROJECTS: [Project; 4] = [
    Project {
        id: 1,
        title: "Digital Experience Platform",
        category: "Web Design & Development",
        year: "2024",
        image: "https://images.unsplash.com/photo-1618005198919-d3d4b5a92ead?w=800&h=600&fit=crop",
        link: "#",
    },
    Project {
        id: 2,
        title: "Brand Identity System",
        category: "Branding & Strategy",
        year: "2024",
        image: "https://images.unsplash.com/photo-1634942537034-2531766767d1?w=800&h=600&fit=crop",
        link: "#",
    },
    Project {
        id: 3,
        title: "E-Commerce Revolution",
        category: "UX/UI Design",
        year: "2023",
        image: "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?w=800&h=600&fit=crop",
        link: "#",
    },
    Project {
        id: 4,
        title: "Mobile App Experience",
        category: "Product Design",
        year: "2023",
        image: "https://images.unsplash.com/photo-1618005198920-f0cb6201c115?w=800&h=600&fit=crop",
        link: "#",
    },
];

const CARD_STAGGER_SECS: f64 = 0.15;

/// CSS `animation-delay` for the card at `index` in the grid.
pub fn card_delay(index: usize) -> String {
    format!("{}s", index as f64 * CARD_STAGGER_SECS)
}

#[derive(Serialize)]
struct CreativeWork<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    genre: &'a str,
    #[serde(rename = "dateCreated")]
    date_created: &'a str,
    image: &'a str,
    url: &'a str,
}

#[derive(Serialize)]
struct PortfolioLd<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    #[serde(rename = "hasPart")]
    has_part: Vec<CreativeWork<'a>>,
}

/// schema.org JSON-LD describing the showcased projects, for the page head.
pub fn structured_data(owner: &str, projects: &[Project]) -> Result<String, serde_json::Error> {
    let ld = PortfolioLd {
        context: "https://schema.org",
        kind: "CollectionPage",
        name: owner,
        has_part: projects
            .iter()
            .map(|p| CreativeWork {
                kind: "CreativeWork",
                name: p.title,
                genre: p.category,
                date_created: p.year,
                image: p.image,
                url: p.link,
            })
            .collect(),
    };
    serde_json::to_string(&ld)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_project_list() {
        assert_eq!(PROJECTS.len(), 4);
        let ids: HashSet<_> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 4);
        assert!(PROJECTS
            .iter()
            .all(|p| p.image.starts_with("https://") && !p.title.is_empty()));
        assert_eq!(PROJECTS[2].category, "UX/UI Design");
    }

    #[test]
    fn test_project_serializes_all_fields() {
        let value = serde_json::to_value(&PROJECTS[1]).unwrap();
        assert_eq!(value["id"], 2);
        assert_eq!(value["title"], "Brand Identity System");
        assert_eq!(value["category"], "Branding & Strategy");
        assert_eq!(value["year"], "2024");
        assert_eq!(value["link"], "#");
        assert_eq!(value.as_object().unwrap().len(), 6);
    }

    #[test]
    fn test_card_delay() {
        assert_eq!(card_delay(0), "0s");
        assert_eq!(card_delay(2), "0.3s");
    }

    #[test]
    fn test_structured_data() {
        let json = structured_data("Dennis Snellenberg", &PROJECTS).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["@type"], "CollectionPage");
        assert_eq!(value["name"], "Dennis Snellenberg");
        let parts = value["hasPart"].as_array().unwrap();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0]["name"], "Digital Experience Platform");
        assert_eq!(parts[3]["dateCreated"], "2023");
    }
}

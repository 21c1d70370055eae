//! Built-in page content for the HRM showcase.

use std::path::Path;

use crate::gallery::GalleryItem;

pub const TAGLINE: &str = "Defending Excellence Since 1990";
pub const INTRO: &str = "Sri Lanka Law College. A movement dedicated to the protection and promotion of \
                         fundamental rights, fostering a culture of justice and equality within the legal fraternity.";
pub const HERO_STATS: [(&str, &str); 3] = [("30+", "Years of Service"), ("500+", "Active Members"), ("100+", "Cases Won")];

pub const MISSION: &str = "To empower law students with the knowledge and skills necessary to advocate for human rights, \
                           fostering a culture of ethical legal practice and social responsibility.";
pub const VISION: &str = "A society where human rights are universally respected, and where the legal profession \
                          serves as a pillar of justice and equality for all.";

pub const OFFICE_ADDRESS: &str = "244 Hulftsdorp Street, Colombo 01200, Sri Lanka";
pub const OFFICE_PHONE: &str = "+94 11 123 4567";

pub const CATEGORIES: [&str; 6] = ["All", "Events", "Education", "Movements", "Workshops", "Community"];

#[derive(Debug, Clone, PartialEq)]
pub struct HeroSlide {
    pub file_name: &'static str,
    pub alt: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub position: &'static str,
    pub content: &'static str,
    pub rating: u8,
}

pub fn hero_slides() -> Vec<HeroSlide> {
    vec![
        HeroSlide {
            file_name: "manudama.png",
            alt: "Manudama - Human Rights Movement",
            title: "Manudama Human Rights",
            description: "Leading the charge for justice and equality",
        },
        HeroSlide {
            file_name: "mainLogo.png",
            alt: "Rights Advocacy Event",
            title: "Rights Advocacy",
            description: "Standing up for fundamental rights",
        },
        HeroSlide {
            file_name: "pl.png",
            alt: "Legal Education Workshop",
            title: "Legal Education",
            description: "Empowering through knowledge",
        },
        HeroSlide {
            file_name: "manurawa01.png",
            alt: "Community Building",
            title: "Community Building",
            description: "Creating networks of change-makers",
        },
        HeroSlide {
            file_name: "manurawa02.png",
            alt: "Advocacy March",
            title: "Advocacy March",
            description: "Making our voices heard",
        },
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            name: "Dr. Kamal Perera",
            position: "Senior Lecturer, Sri Lanka Law College",
            content: "The Human Rights Movement has been instrumental in shaping the consciousness of our students. \
                      Their dedication to justice and equality is truly inspiring.",
            rating: 5,
        },
        Testimonial {
            name: "Ms. Shanthi Fernando",
            position: "Human Rights Lawyer",
            content: "Working alongside HRM has shown me the power of youth in driving social change. \
                      These young advocates are the future of human rights protection in Sri Lanka.",
            rating: 5,
        },
        Testimonial {
            name: "Ravi Kumarasinghe",
            position: "Former President, HRM",
            content: "Being part of this movement transformed my understanding of law and justice. \
                      We're not just learning law; we're living it.",
            rating: 5,
        },
        Testimonial {
            name: "Prof. Nirmala Weerasinghe",
            position: "Dean, Faculty of Law",
            content: "HRM represents the best of legal education - combining academic excellence \
                      with passionate advocacy for fundamental rights.",
            rating: 5,
        },
    ]
}

/// Gallery entries. When `image_dir` is given, each item points at
/// `gallery-<id>.jpg` inside it.
pub fn gallery_items(image_dir: Option<&Path>) -> Vec<GalleryItem> {
    let rows: [(u32, &str, &str, &str, &str, u32, &str, bool); 8] = [
        (1, "Annual General Meeting", "Events", "2024-01-15", "Main Hall", 150,
            "Annual gathering of members discussing future initiatives and celebrating achievements.", true),
        (2, "Human Rights Workshop", "Education", "2024-02-10", "Seminar Room", 45,
            "Interactive workshop on fundamental rights and legal procedures.", false),
        (3, "Advocacy March", "Movements", "2024-03-05", "Colombo Streets", 300,
            "Peaceful march advocating for human rights awareness.", true),
        (4, "Legal Aid Clinic", "Workshops", "2024-03-20", "Community Center", 60,
            "Free legal consultation for underserved communities.", false),
        (5, "Panel Discussion", "Events", "2024-04-02", "Auditorium", 200,
            "Expert panel discussing current human rights challenges.", true),
        (6, "Awareness Campaign", "Movements", "2024-04-18", "University Campus", 180,
            "Campus-wide campaign promoting human rights education.", false),
        (7, "Community Outreach", "Community", "2024-05-01", "Rural Area", 75,
            "Bringing legal awareness to rural communities.", true),
        (8, "Youth Leadership Summit", "Workshops", "2024-05-15", "Conference Center", 120,
            "Empowering young leaders in human rights advocacy.", false),
    ];

    rows.into_iter()
        .map(|(id, title, category, date, location, participants, description, featured)| GalleryItem {
            id,
            title: title.to_string(),
            category: category.to_string(),
            date: date.to_string(),
            location: location.to_string(),
            participants,
            description: description.to_string(),
            featured,
            image: image_dir.map(|dir| dir.join(format!("gallery-{id}.jpg"))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_gallery_category_has_a_filter_tab() {
        for item in gallery_items(None) {
            assert!(CATEGORIES.contains(&item.category.as_str()), "{}", item.category);
        }
    }

    #[test]
    fn gallery_images_resolve_inside_image_dir() {
        let items = gallery_items(Some(Path::new("/srv/hrm")));
        assert_eq!(items[2].image.as_deref(), Some(Path::new("/srv/hrm/gallery-3.jpg")));
    }
}

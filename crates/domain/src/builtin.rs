//! The clinic's own copy, used when no content file is configured.

use crate::content::{
    AboutContent, ClinicInfo, ContactContent, ContactLink, Hero, Highlight, HomeContent,
    HoursEntry, OfferingCard, SiteContent, Stat, TeamMember, Value,
};
use crate::id::ServiceId;
use crate::image::Placeholder;
use crate::service::Service;

/// Builtin site content.
#[must_use]
pub fn content() -> SiteContent {
    SiteContent {
        clinic: clinic(),
        home: home(),
        about: about(),
        contact: ContactContent {
            hero: Hero {
                title: "Contact Us".to_string(),
                subtitle: "We're here to answer your questions and provide the support you need. Reach out to us today.".to_string(),
            },
        },
        hours: hours(),
        services: services(),
    }
}

fn link(label: &str, href: &str) -> ContactLink {
    ContactLink {
        label: label.to_string(),
        href: href.to_string(),
    }
}

fn highlight(title: &str, description: &str) -> Highlight {
    Highlight {
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn clinic() -> ClinicInfo {
    ClinicInfo {
        name: "Osteopraktik".to_string(),
        brand: "OSTEOPRAKTIK".to_string(),
        copyright_year: 2024,
        address: vec![
            "123 Health Street,".to_string(),
            "Wellness City, 12345".to_string(),
        ],
        phone: link("+1 (555) 123-4567", "tel:+15551234567"),
        email: link("info@osteopraktik.com", "mailto:info@osteopraktik.com"),
        socials: vec![
            link("Facebook", "https://facebook.com"),
            link("Instagram", "https://instagram.com"),
        ],
    }
}

fn hours() -> Vec<HoursEntry> {
    [
        ("Monday - Friday", "9:00 AM - 7:00 PM"),
        ("Saturday", "10:00 AM - 4:00 PM"),
        ("Sunday", "Closed"),
    ]
    .into_iter()
    .map(|(days, hours)| HoursEntry {
        days: days.to_string(),
        hours: hours.to_string(),
    })
    .collect()
}

fn home() -> HomeContent {
    let offerings = [
        (
            "Massage Therapy",
            "Our skilled massage therapists use various techniques to relieve muscle tension, improve circulation, and promote relaxation. Perfect for stress relief and pain management.",
        ),
        (
            "Chiropractic Care",
            "Our chiropractors specialize in diagnosing and treating musculoskeletal disorders, with a focus on spinal adjustments to improve overall health and well-being.",
        ),
        (
            "Rehabilitation",
            "We offer comprehensive rehabilitation programs designed to help you recover from injuries, surgeries, or chronic conditions, restoring your strength and mobility.",
        ),
        (
            "Physiotherapy",
            "Our physiotherapists use evidence-based techniques to assess, diagnose, and treat a wide range of physical conditions, helping you regain function and prevent future injuries.",
        ),
        (
            "Osteopathy",
            "Osteopathic treatment focuses on the relationship between the body's structure and function, using hands-on techniques to improve overall health and well-being.",
        ),
        (
            "Acupuncture",
            "Our licensed acupuncturists use this traditional Chinese medicine technique to stimulate specific points on the body, promoting natural healing and pain relief.",
        ),
    ]
    .into_iter()
    .map(|(title, description)| OfferingCard {
        title: title.to_string(),
        description: description.to_string(),
        image: Placeholder::new(300, 200).text(title).to_string(),
    })
    .collect();

    HomeContent {
        hero_cta: "Start Your Journey".to_string(),
        hero_image: Placeholder::new(600, 400).to_string(),
        why_image: Placeholder::new(600, 400).text("Why Choose Us").to_string(),
        why_text: "At Osteopraktik, we pride ourselves on our commitment to excellence, years of experience, and high customer satisfaction. Our team of expert practitioners is dedicated to providing personalized care and achieving the best possible outcomes for our patients.".to_string(),
        about_intro: "Osteopraktik is a leading holistic health center dedicated to improving the well-being of our patients through innovative and personalized care. Founded on the principles of osteopathy, we combine traditional wisdom with modern medical advancements to offer a comprehensive approach to health and wellness.".to_string(),
        facility_intro: "Take a virtual tour of our modern, welcoming clinic. Our state-of-the-art facilities are designed to provide a comfortable and healing environment for all our patients.".to_string(),
        facility_images: (1..=5)
            .map(|n| {
                Placeholder::new(400, 300)
                    .text(&format!("Facility Image {n}"))
                    .to_string()
            })
            .collect(),
        hero: Hero {
            title: "Discover Holistic Healing at Osteopraktik".to_string(),
            subtitle: "Experience personalized care and expert treatments for your body and mind.".to_string(),
        },
        stats: [(50, "Happy Customers"), (15, "Years of Experience"), (98, "Customer Satisfaction")]
            .into_iter()
            .map(|(end, label)| Stat {
                end,
                label: label.to_string(),
            })
            .collect(),
        pillars: vec![
            highlight(
                "Our Philosophy",
                "We believe in treating the whole person, not just the symptoms. Our approach focuses on identifying the root causes of health issues and addressing them through natural, non-invasive methods.",
            ),
            highlight(
                "Our Team",
                "Our diverse team of experienced practitioners includes osteopaths, chiropractors, physiotherapists, and massage therapists. Each brings unique skills and perspectives to provide comprehensive care.",
            ),
            highlight(
                "Our Commitment",
                "We are committed to ongoing education and staying at the forefront of holistic health practices. This ensures that our patients receive the most effective and up-to-date treatments available.",
            ),
        ],
        offerings,
    }
}

fn about() -> AboutContent {
    let team = [
        ("Dr. Emily Chen", "Lead Osteopath", "emily-chen"),
        ("Michael Johnson", "Physiotherapist", "michael-johnson"),
        ("Sarah Thompson", "Massage Therapist", "sarah-thompson"),
        ("Dr. David Lee", "Chiropractor", "david-lee"),
        ("Lisa Patel", "Acupuncturist", "lisa-patel"),
        ("Robert Wilson", "Nutritionist", "robert-wilson"),
    ]
    .into_iter()
    .map(|(name, role, slug)| TeamMember {
        name: name.to_string(),
        role: role.to_string(),
        photo: Placeholder::new(300, 300).text(slug).to_string(),
    })
    .collect();

    let values = [
        ("Holistic Approach", "We treat the whole person, not just symptoms."),
        ("Personalized Care", "Every treatment plan is tailored to individual needs."),
        ("Continuous Learning", "We stay updated with the latest in healthcare."),
        ("Empathy", "We prioritize understanding and compassion in our care."),
        ("Collaboration", "We work together for the best patient outcomes."),
        ("Integrity", "We maintain the highest ethical standards in all we do."),
    ]
    .into_iter()
    .map(|(title, description)| Value {
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect();

    AboutContent {
        story_image: Placeholder::new(600, 400).text("Our Story").to_string(),
        story: vec![
            "Founded in 2005, Osteopraktik began as a small clinic with a big vision: to revolutionize holistic healthcare in our community. Our journey started with a team of passionate practitioners who believed in treating not just symptoms, but the whole person.".to_string(),
            "Over the years, we've grown in size and expertise, but our core mission remains the same: to provide personalized, comprehensive care that empowers our patients to achieve optimal health and wellness.".to_string(),
            "Today, Osteopraktik stands as a beacon of integrative healthcare, blending traditional wisdom with cutting-edge techniques to offer our patients the best of both worlds.".to_string(),
        ],
        hero: Hero {
            title: "About Osteopraktik".to_string(),
            subtitle: "Discover our journey, our team, and our commitment to holistic healing and wellness.".to_string(),
        },
        team,
        values,
        cta: Hero {
            title: "Experience the Osteopraktik Difference".to_string(),
            subtitle: "Join us on a journey to better health and wellness. Book your appointment today and take the first step towards a healthier you.".to_string(),
        },
    }
}

fn services() -> Vec<Service> {
    vec![
        Service {
            id: ServiceId::new(1),
            name: "Massage Therapy".to_string(),
            short_description: "Relieve tension and promote relaxation".to_string(),
            long_description: "Our expert massage therapists use a variety of techniques to address muscle tension, improve circulation, and promote overall relaxation. This service is perfect for those looking to reduce stress, alleviate pain, and improve their overall well-being.".to_string(),
            price: 80,
            benefits: strings(&[
                "Reduces muscle tension and pain",
                "Improves circulation",
                "Promotes relaxation and stress relief",
                "Enhances flexibility and range of motion",
            ]),
            duration: "60 minutes".to_string(),
            image: Placeholder::new(400, 300).text("Massage Therapy").to_string(),
        },
        Service {
            id: ServiceId::new(2),
            name: "Osteopathy".to_string(),
            short_description: "Holistic approach to musculoskeletal issues".to_string(),
            long_description: "Osteopathy is a form of manual therapy that focuses on the relationship between the body's structure and function. Our osteopaths use hands-on techniques to diagnose, treat, and prevent a wide range of health issues, with a particular emphasis on the musculoskeletal system.".to_string(),
            price: 120,
            benefits: strings(&[
                "Improves joint mobility",
                "Relieves muscle tension",
                "Enhances blood circulation",
                "Supports the body's natural healing processes",
            ]),
            duration: "45-60 minutes".to_string(),
            image: Placeholder::new(400, 300).text("Osteopathy").to_string(),
        },
        Service {
            id: ServiceId::new(3),
            name: "Physiotherapy".to_string(),
            short_description: "Restore movement and function".to_string(),
            long_description: "Our physiotherapy services are designed to help patients recover from injuries, manage chronic conditions, and improve their overall physical function. We use a combination of exercises, manual therapy, and education to help you achieve your health and fitness goals.".to_string(),
            price: 100,
            benefits: strings(&[
                "Improves mobility and flexibility",
                "Reduces pain and inflammation",
                "Enhances strength and coordination",
                "Prevents future injuries",
            ]),
            duration: "45-60 minutes".to_string(),
            image: Placeholder::new(400, 300).text("Physiotherapy").to_string(),
        },
        Service {
            id: ServiceId::new(4),
            name: "Acupuncture".to_string(),
            short_description: "Traditional Chinese medicine for pain relief".to_string(),
            long_description: "Acupuncture is an ancient Chinese healing practice that involves inserting thin needles into specific points on the body. This technique can help alleviate pain, reduce stress, and promote overall wellness by balancing the body's energy flow.".to_string(),
            price: 90,
            benefits: strings(&[
                "Relieves chronic pain",
                "Reduces stress and anxiety",
                "Improves sleep quality",
                "Boosts immune system function",
            ]),
            duration: "30-45 minutes".to_string(),
            image: Placeholder::new(400, 300).text("Acupuncture").to_string(),
        },
        Service {
            id: ServiceId::new(5),
            name: "Chiropractic Care".to_string(),
            short_description: "Spinal adjustments for better health".to_string(),
            long_description: "Our chiropractic care focuses on diagnosing and treating mechanical disorders of the musculoskeletal system, especially the spine. Through manual adjustments and other techniques, our chiropractors aim to improve your body's physical function and alleviate pain.".to_string(),
            price: 110,
            benefits: strings(&[
                "Improves spinal alignment",
                "Reduces back and neck pain",
                "Enhances nervous system function",
                "Increases range of motion",
            ]),
            duration: "30-45 minutes".to_string(),
            image: Placeholder::new(400, 300).text("Chiropractic Care").to_string(),
        },
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_form_a_valid_catalog() {
        let catalog = content().catalog().unwrap();
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn should_list_massage_therapy_first() {
        let catalog = content().catalog().unwrap();
        let first = catalog.first();
        assert_eq!(first.id, ServiceId::new(1));
        assert_eq!(first.name, "Massage Therapy");
        assert_eq!(first.price, 80);
        assert_eq!(first.duration, "60 minutes");
    }

    #[test]
    fn should_give_every_service_four_benefits() {
        for service in content().services {
            assert_eq!(service.benefits.len(), 4, "{}", service.name);
        }
    }

    #[test]
    fn should_carry_three_home_counters() {
        let ends: Vec<_> = content().home.stats.iter().map(|s| s.end).collect();
        assert_eq!(ends, [50, 15, 98]);
    }

    #[test]
    fn should_use_literal_contact_uris() {
        let clinic = content().clinic;
        assert_eq!(clinic.phone.href, "tel:+15551234567");
        assert_eq!(clinic.email.href, "mailto:info@osteopraktik.com");
        assert_eq!(clinic.address_line(), "123 Health Street, Wellness City, 12345");
    }

    #[test]
    fn should_caption_facility_images_in_order() {
        let images = content().home.facility_images;
        assert_eq!(images.len(), 5);
        assert_eq!(images[4], "/img.png?height=300&width=400&text=Facility+Image+5");
    }
}

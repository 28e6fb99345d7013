//! Seed fixtures for empty collections.
//!
//! First read of a missing collection writes these and returns them, so a
//! fresh data directory comes up with a browsable showroom and a default
//! admin account. The admin ships without a password hash; credentials are
//! provisioned through the CLI.

use chrono::Utc;

use veloce_core::{
    Car, CarId, CarSpecs, CarType, ContactInfo, Email, FooterInfo, HeroSection, SiteConfig,
    UserId, UserRole,
};

use crate::models::{SessionRecord, UserRecord};

/// The six cars every fresh install starts with.
///
/// All records share one timestamp so the default listing keeps this order
/// (the sort is stable and newer records still win).
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn seed_cars() -> Vec<Car> {
    let now = Utc::now();
    let car = |id: &str,
               name: &str,
               brand: &str,
               tagline: &str,
               price: &str,
               price_value: u64,
               image: &str,
               acceleration: &str,
               horsepower: &str,
               horsepower_value: u32,
               top_speed: &str,
               description: &str,
               featured: bool,
               car_type: CarType,
               specs: CarSpecs| Car {
        id: CarId::new(id),
        name: name.to_owned(),
        brand: brand.to_owned(),
        tagline: tagline.to_owned(),
        price: price.to_owned(),
        price_value,
        image: image.to_owned(),
        acceleration: acceleration.to_owned(),
        horsepower: horsepower.to_owned(),
        horsepower_value,
        top_speed: top_speed.to_owned(),
        description: description.to_owned(),
        featured,
        car_type,
        specs,
        created_at: now,
        updated_at: now,
    };

    vec![
        car(
            "phantom-gt",
            "Phantom GT",
            "Phantom",
            "Flagship Coupe",
            "Starting at $145,000",
            145_000,
            "https://images.unsplash.com/photo-1552519507-da3b142c6e3d?q=80&w=2072&auto=format&fit=crop",
            "3.2s",
            "650 HP",
            650,
            "205 mph",
            "The Phantom GT isn't just a car; it's a statement. Constructed with a monocoque carbon-fiber chassis, it achieves a power-to-weight ratio that defies physics. Every curve serves an aerodynamic purpose.",
            true,
            CarType::Coupe,
            CarSpecs {
                fuel: Some("Petrol".to_owned()),
                engine: Some("Mid-Engine V8 Twin-Turbo".to_owned()),
                transmission: Some("7-Speed Dual Clutch".to_owned()),
                weight: Some("1,280 kg".to_owned()),
                range: None,
            },
        ),
        car(
            "vortex-s",
            "Vortex S",
            "Vortex",
            "Electric Performance",
            "Starting at $189,000",
            189_000,
            "https://images.unsplash.com/photo-1600712242805-5f78671b24da?q=80&w=1964&auto=format&fit=crop",
            "2.1s",
            "1020 HP",
            1020,
            "200 mph",
            "Silence has never been this loud. The Vortex S redefines electric mobility with instant torque vectoring and a range that lets you cross continents on a single charge.",
            true,
            CarType::Electric,
            CarSpecs {
                fuel: Some("Electric".to_owned()),
                engine: Some("Dual Motor AWD".to_owned()),
                transmission: Some("Single Speed Direct Drive".to_owned()),
                weight: Some("1,950 kg".to_owned()),
                range: Some("450 miles".to_owned()),
            },
        ),
        car(
            "apex-one",
            "Apex One",
            "Apex",
            "Hypercar Series",
            "Starting at $2,500,000",
            2_500_000,
            "https://images.unsplash.com/photo-1614162692292-7ac56d7f7f1e?q=80&w=2000&auto=format&fit=crop",
            "1.9s",
            "1600 HP",
            1600,
            "250+ mph",
            "A road-legal missile. The Apex One is the ultimate expression of automotive capability, featuring active aerodynamics and a hybrid powertrain derived directly from Le Mans winners.",
            true,
            CarType::Hypercar,
            CarSpecs {
                fuel: Some("Hybrid".to_owned()),
                engine: Some("V12 Hybrid Assist".to_owned()),
                transmission: Some("9-Speed Sequential".to_owned()),
                weight: Some("1,400 kg".to_owned()),
                range: None,
            },
        ),
        car(
            "wraith-black",
            "Wraith Black",
            "Wraith",
            "Midnight Edition",
            "$320,000",
            320_000,
            "https://images.unsplash.com/photo-1503376763036-066120622c74?q=80&w=2070&auto=format&fit=crop",
            "3.4s",
            "620 HP",
            620,
            "190 mph",
            "Darkness reimagined. The Wraith Black edition combines stealth aesthetics with brutal performance.",
            true,
            CarType::Coupe,
            CarSpecs {
                fuel: Some("Petrol".to_owned()),
                engine: Some("V10 Naturally Aspirated".to_owned()),
                transmission: None,
                weight: Some("1,550 kg".to_owned()),
                range: None,
            },
        ),
        car(
            "celestial-open",
            "Celestial Open",
            "Celestial",
            "Skyward Bound",
            "$410,000",
            410_000,
            "https://images.unsplash.com/photo-1553260177-f27a6f296365?q=80&w=2000&auto=format&fit=crop",
            "2.9s",
            "710 HP",
            710,
            "210 mph",
            "Drop the top and raise your pulse. The Celestial Open offers an uncompromised open-air experience.",
            true,
            CarType::Convertible,
            CarSpecs {
                fuel: Some("Petrol".to_owned()),
                engine: Some("V8 Twin-Turbo".to_owned()),
                transmission: None,
                weight: Some("1,450 kg".to_owned()),
                range: None,
            },
        ),
        car(
            "nebula-x",
            "Nebula X",
            "Nebula",
            "Future SUV",
            "$165,000",
            165_000,
            "https://images.unsplash.com/photo-1533473359331-0135ef1bcfb0?q=80&w=2070&auto=format&fit=crop",
            "2.4s",
            "850 HP",
            850,
            "180 mph",
            "Utility without compromise. The Nebula X brings hypercar performance to the family hauler segment.",
            false,
            CarType::Suv,
            CarSpecs {
                fuel: Some("Electric".to_owned()),
                engine: Some("Tri-Motor AWD".to_owned()),
                transmission: None,
                weight: Some("2,200 kg".to_owned()),
                range: Some("400 miles".to_owned()),
            },
        ),
    ]
}

/// The default admin account.
///
/// Verified but passwordless: it cannot log in until the CLI sets a
/// password.
#[must_use]
pub fn seed_users() -> Vec<UserRecord> {
    let now = Utc::now();
    vec![UserRecord {
        id: UserId::new("admin-1"),
        name: "Admin User".to_owned(),
        email: Email::parse("admin@veloce.dev").expect("fixture email is valid"),
        password_hash: None,
        role: UserRole::Admin,
        avatar: "https://ui-avatars.com/api/?name=Admin+User&background=000&color=fff".to_owned(),
        joined_date: now,
        is_verified: true,
        verification_code: None,
        reset_code: None,
        created_at: now,
        updated_at: now,
    }]
}

/// Sessions start empty.
#[must_use]
pub fn seed_sessions() -> Vec<SessionRecord> {
    Vec::new()
}

/// The shipped site content.
#[must_use]
pub fn default_site_config() -> SiteConfig {
    SiteConfig {
        site_name: "Veloce".to_owned(),
        logo_url: String::new(),
        hero: HeroSection {
            tagline: "The Architects of Speed".to_owned(),
            headline_prefix: "ABSOLUTE".to_owned(),
            headline_gradient: "VELOCITY".to_owned(),
            description: "Redefining the physics of driving. Zero emissions. Infinite adrenaline. The future isn't coming; it's already in the rearview mirror.".to_owned(),
            hero_image: "https://images.unsplash.com/photo-1511919884226-fd3cad34687c?q=80&w=2070&auto=format&fit=crop".to_owned(),
        },
        contact: ContactInfo {
            address: "123 Velocity Avenue, Modena, Italy 41121".to_owned(),
            phone: "+39 059 123 4567".to_owned(),
            email: "concierge@veloce.dev".to_owned(),
        },
        footer: FooterInfo {
            description: "Making the world a better place through constructing elegant hierarchies.".to_owned(),
            copyright: "© 2025 Veloce Automotive, Inc. All rights reserved.".to_owned(),
        },
        terms_and_conditions: "Standard terms apply.".to_owned(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_cars_shape() {
        let cars = seed_cars();
        assert_eq!(cars.len(), 6);

        // Exactly one non-featured car.
        assert_eq!(cars.iter().filter(|c| !c.featured).count(), 1);

        // IDs are unique.
        let mut ids: Vec<_> = cars.iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 6);

        // Shared timestamp keeps the listing in fixture order.
        let first_created = cars.first().unwrap().created_at;
        assert!(cars.iter().all(|c| c.created_at == first_created));
    }

    #[test]
    fn test_seed_admin_cannot_log_in() {
        let users = seed_users();
        assert_eq!(users.len(), 1);
        let admin = users.first().unwrap();
        assert_eq!(admin.id.as_str(), "admin-1");
        assert!(admin.role.is_admin());
        assert!(admin.is_verified);
        assert!(admin.password_hash.is_none());
    }

    #[test]
    fn test_sessions_start_empty() {
        assert!(seed_sessions().is_empty());
    }

    #[test]
    fn test_default_site_config_copy() {
        let config = default_site_config();
        assert_eq!(config.site_name, "Veloce");
        assert_eq!(config.hero.headline_gradient, "VELOCITY");
        assert!(config.footer.copyright.contains("Veloce Automotive"));
    }
}

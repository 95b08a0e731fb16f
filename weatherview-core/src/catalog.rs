//! Fixed reference data shown next to the live weather.

use crate::{
    imagery::ImageRef,
    model::{RainChanceSample, RecommendedPlace},
};

const GREY: &str = "#D3D3D3";

static RECOMMENDED_PLACES: [RecommendedPlace; 4] = [
    RecommendedPlace {
        name: "Kathmandu",
        distance: "15 KM",
        description: "City full of temples and monkeys",
        image: ImageRef::KATHMANDU,
    },
    RecommendedPlace {
        name: "Chitwan",
        distance: "50 KM",
        description: "Meet the wildlife",
        image: ImageRef::KATHMANDU,
    },
    RecommendedPlace {
        name: "Pokhara",
        distance: "90 KM",
        description: "Tourist's hub",
        image: ImageRef::KATHMANDU,
    },
    RecommendedPlace {
        name: "Dhangadhi",
        distance: "185 KM",
        description: "Beauty of Far-West",
        image: ImageRef::KATHMANDU,
    },
];

static RAIN_CHANCE: [RainChanceSample; 7] = [
    RainChanceSample { day: "Sun", level: "Low", height: 40.0, color: GREY },
    RainChanceSample { day: "Mon", level: "Medium", height: 90.0, color: GREY },
    RainChanceSample { day: "Tue", level: "Low", height: 60.0, color: GREY },
    RainChanceSample { day: "Wed", level: "Medium", height: 90.0, color: GREY },
    RainChanceSample { day: "Thu", level: "Medium", height: 90.0, color: GREY },
    RainChanceSample { day: "Fri", level: "High", height: 120.0, color: "#007BFF" },
    RainChanceSample { day: "Sat", level: "Heavy", height: 130.0, color: "#FF1493" },
];

pub fn recommended_places() -> &'static [RecommendedPlace] {
    &RECOMMENDED_PLACES
}

/// One sample per weekday, Sunday first.
pub fn rain_chance_samples() -> &'static [RainChanceSample] {
    &RAIN_CHANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_places_fully_described() {
        let places = recommended_places();
        assert_eq!(places.len(), 4);
        for place in places {
            assert!(!place.name.is_empty());
            assert!(place.distance.ends_with("KM"));
            assert!(!place.description.is_empty());
        }
    }

    #[test]
    fn one_sample_per_weekday() {
        let days: Vec<_> = rain_chance_samples().iter().map(|s| s.day).collect();
        assert_eq!(days, ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);
    }
}

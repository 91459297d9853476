//! Static sample listings.
//!
//! Shown as placeholder recommendations when no real post qualifies, and
//! browsable as room details.

use crate::models::{Amount, Post, PostKind, PostStatus};

struct Sample {
    id: i64,
    title: &'static str,
    image: &'static str,
    location: &'static str,
    members: u32,
    gender: &'static str,
    price: i64,
    description: &'static str,
    amenities: &'static [&'static str],
    lifestyle: &'static str,
}

const SAMPLES: &[Sample] = &[
    Sample {
        id: 201,
        title: "Cozy Shared Apartment near Central Market",
        image: "/rooms/room-01.jpg",
        location: "Daun Penh",
        members: 2,
        gender: "Any",
        price: 180,
        description: "Bright two bedroom apartment with a shared kitchen, looking for a tidy and friendly roommate",
        amenities: &["WiFi", "Kitchen", "Furnished"],
        lifestyle: "Clean,Social,Home Cook",
    },
    Sample {
        id: 202,
        title: "Quiet Studio Share in Toul Kork",
        image: "/rooms/room-02.jpg",
        location: "Toul Kork",
        members: 2,
        gender: "Female",
        price: 150,
        description: "Quiet clean space suited to students, close to universities and cafes",
        amenities: &["WiFi", "Parking", "Furnished"],
        lifestyle: "Quiet,Studious,Clean",
    },
    Sample {
        id: 203,
        title: "Bright Room with Balcony",
        image: "/rooms/room-03.jpg",
        location: "Boeung Keng Kang",
        members: 3,
        gender: "Any",
        price: 220,
        description: "Spacious room with a private balcony in a lively neighbourhood full of restaurants",
        amenities: &["WiFi", "Kitchen", "Shared Space"],
        lifestyle: "Social,Music Lover,Night Owl",
    },
    Sample {
        id: 204,
        title: "Modern Condo Room in Chamkarmon",
        image: "/rooms/room-04.jpg",
        location: "Chamkarmon",
        members: 2,
        gender: "Male",
        price: 250,
        description: "Modern condo with gym and pool access, ideal for working professionals who keep a tidy home",
        amenities: &["WiFi", "Parking", "Furnished", "Shared Space"],
        lifestyle: "Fitness Enthusiast,Early Bird,Minimalist",
    },
    Sample {
        id: 205,
        title: "Pet Friendly House Share",
        image: "/rooms/room-05.jpg",
        location: "Sen Sok",
        members: 4,
        gender: "Any",
        price: 120,
        description: "Family house with a garden where pets are welcome and weekends are spent outdoors",
        amenities: &["WiFi", "Kitchen", "Pet Friendly", "Parking"],
        lifestyle: "Pet Lover,Outdoorsy,Social",
    },
    Sample {
        id: 206,
        title: "Riverside Room in Chroy Changvar",
        image: "/rooms/room-06.jpg",
        location: "Chroy Changvar",
        members: 2,
        gender: "Any",
        price: 170,
        description: "Calm riverside room with great views for someone who enjoys quiet evenings and reading",
        amenities: &["WiFi", "Furnished"],
        lifestyle: "Quiet,Artistic,Minimalist",
    },
    Sample {
        id: 207,
        title: "Budget Room near Olympic Stadium",
        image: "/rooms/room-07.jpg",
        location: "7 Makara",
        members: 3,
        gender: "Male",
        price: 100,
        description: "Affordable shared room for students with a shared kitchen and fast internet",
        amenities: &["WiFi", "Kitchen"],
        lifestyle: "Studious,Gamer,Tech Savvy",
    },
    Sample {
        id: 208,
        title: "Garden Room in Russey Keo",
        image: "/rooms/room-08.jpg",
        location: "Russey Keo",
        members: 2,
        gender: "Female",
        price: 130,
        description: "Peaceful room with a vegetable garden, looking for a vegetarian home cook",
        amenities: &["Kitchen", "Shared Space"],
        lifestyle: "Vegetarian,Home Cook,Early Bird",
    },
];

impl Sample {
    fn to_post(&self) -> Post {
        Post {
            id: self.id,
            title: self.title.to_string(),
            image: self.image.to_string(),
            location: self.location.to_string(),
            number_of_members: self.members,
            gender: self.gender.to_string(),
            price_per_person: Some(Amount::from(self.price)),
            description: self.description.to_string(),
            amenities: self.amenities.iter().map(|a| a.to_string()).collect(),
            lifestyle_preferences: self.lifestyle.to_string(),
            created_at: None,
            updated_at: None,
            kind: PostKind::RoommateRequest,
            status: PostStatus::Active,
            views: 0,
            inquiries: 0,
        }
    }
}

/// All sample listings, in catalog order
pub fn sample_listings() -> Vec<Post> {
    SAMPLES.iter().map(Sample::to_post).collect()
}

/// Look up one sample listing by id
pub fn find_listing(id: i64) -> Option<Post> {
    SAMPLES.iter().find(|s| s.id == id).map(Sample::to_post)
}

//! Demonstration data set loaded at startup on an empty store

use super::Services;
use crate::{
    error::AppResult,
    models::{Booking, CheckIn, Equipment, Event, User},
};

// name, email, phone, role, roll number
const USERS: &[(&str, &str, &str, &str, &str)] = &[
    ("Asha Verma", "asha.verma@campus.edu", "98450 11001", "Organizer", "241001001"),
    ("Ravi Menon", "ravi.menon@campus.edu", "98450 11020", "Organizer", "241001020"),
    ("Meera Iyer", "meera.iyer@campus.edu", "98450 11050", "Volunteer", "241001050"),
    ("Kabir Shah", "kabir.shah@campus.edu", "98450 11075", "Participant", "241001075"),
    ("Nisha Rao", "nisha.rao@campus.edu", "98450 11100", "Participant", "241001100"),
];

// name, date, venue, description, organizer (index into USERS)
const EVENTS: &[(&str, &str, &str, &str, usize)] = &[
    ("Tech Symposium", "2024-11-15", "Main Auditorium", "Workshops on AI, web development and cloud computing", 0),
    ("Code Sprint Hackathon", "2024-11-20", "Computer Lab Block A", "24-hour coding challenge", 1),
    ("Cultural Fest", "2024-12-10", "Open Ground", "Dance, music and drama performances", 2),
    ("Sports Day", "2024-10-28", "Sports Complex", "Inter-department sports competition", 0),
    ("Robotics Exhibition", "2024-11-18", "Exhibition Hall", "Student robotics projects", 3),
];

// name, category, status, location, purchase date
const EQUIPMENT: &[(&str, &str, &str, &str, &str)] = &[
    ("Projector 1", "Electronics", "Available", "Room 101", "2022-01-15"),
    ("Projector 2", "Electronics", "Available", "Room 102", "2022-01-15"),
    ("Sound System", "Electronics", "Available", "Auditorium", "2021-07-02"),
    ("Microphone Set", "Electronics", "Available", "Store", "2022-03-20"),
    ("Camera", "Electronics", "Borrowed", "Media Room", "2023-05-10"),
    ("Laptop", "Electronics", "Available", "IT Department", "2023-05-10"),
    ("White Board", "Furniture", "Available", "Room 201", "2020-09-01"),
    ("Chairs (50)", "Furniture", "Available", "Storage", "2019-06-12"),
    ("Banner Stand", "Display", "Available", "Marketing", "2024-02-01"),
];

// event, equipment, assignee (indexes), borrow date, return date, remarks
const BOOKINGS: &[(usize, usize, usize, &str, Option<&str>, &str)] = &[
    (0, 0, 0, "2024-11-10", Some("2024-11-16"), "Keynote hall"),
    (0, 2, 0, "2024-11-10", Some("2024-11-16"), "Keynote hall"),
    (1, 1, 1, "2024-11-15", Some("2024-11-21"), "Judging room"),
    (1, 5, 1, "2024-11-15", None, "Registration desk"),
    (4, 4, 3, "2024-11-12", None, "Exhibit photography"),
    (2, 7, 2, "2024-12-05", Some("2024-12-11"), "Audience seating"),
];

// user, event (indexes), check-in time, check-out time, status
const CHECKINS: &[(usize, usize, &str, Option<&str>, &str)] = &[
    (0, 3, "2024-10-28T09:15:00", Some("2024-10-28T17:00:00"), "Present"),
    (2, 3, "2024-10-28T09:18:00", Some("2024-10-28T16:30:00"), "Present"),
    (3, 3, "2024-10-28T09:25:00", None, "Present"),
    (4, 3, "2024-10-28T09:40:00", None, "Late"),
];

fn owned(value: &str) -> Option<String> {
    Some(value.to_string())
}

/// Insert the demonstration data set. Does nothing when users already exist.
/// Returns whether anything was inserted.
pub async fn load_sample_data(services: &Services) -> AppResult<bool> {
    if !services.users.list().await?.is_empty() {
        tracing::info!("Store already holds users, skipping sample data");
        return Ok(false);
    }

    let mut user_ids = Vec::with_capacity(USERS.len());
    for &(name, email, phone, role, roll_number) in USERS {
        let user = services
            .users
            .create(User {
                name: owned(name),
                email: owned(email),
                phone: owned(phone),
                role: owned(role),
                roll_number: owned(roll_number),
                ..User::default()
            })
            .await?;
        user_ids.push(user.user_id);
    }

    let mut event_ids = Vec::with_capacity(EVENTS.len());
    for &(name, date, venue, description, organizer) in EVENTS {
        let event = services
            .events
            .create(Event {
                event_name: owned(name),
                event_date: owned(date),
                venue: owned(venue),
                description: owned(description),
                organizer_id: user_ids[organizer],
                ..Event::default()
            })
            .await?;
        event_ids.push(event.event_id);
    }

    let mut equip_ids = Vec::with_capacity(EQUIPMENT.len());
    for &(name, category, status, location, purchase_date) in EQUIPMENT {
        let equipment = services
            .equipment
            .create(Equipment {
                equip_name: owned(name),
                category: owned(category),
                status: owned(status),
                location: owned(location),
                purchase_date: owned(purchase_date),
                ..Equipment::default()
            })
            .await?;
        equip_ids.push(equipment.equip_id);
    }

    for &(event, equip, assignee, borrow_date, return_date, remarks) in BOOKINGS {
        services
            .bookings
            .create(Booking {
                event_id: event_ids[event],
                equip_id: equip_ids[equip],
                assigned_to: user_ids[assignee],
                borrow_date: owned(borrow_date),
                return_date: return_date.map(str::to_string),
                remarks: owned(remarks),
                ..Booking::default()
            })
            .await?;
    }

    for &(user, event, checkin_time, checkout_time, status) in CHECKINS {
        services
            .checkins
            .create(CheckIn {
                user_id: user_ids[user],
                event_id: event_ids[event],
                checkin_time: owned(checkin_time),
                checkout_time: checkout_time.map(str::to_string),
                status: owned(status),
                ..CheckIn::default()
            })
            .await?;
    }

    tracing::info!(
        users = USERS.len(),
        events = EVENTS.len(),
        equipment = EQUIPMENT.len(),
        bookings = BOOKINGS.len(),
        checkins = CHECKINS.len(),
        "Sample data loaded"
    );
    Ok(true)
}

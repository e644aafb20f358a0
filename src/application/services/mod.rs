// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            bookings::BookingCommandService, guests::GuestCommandService,
            rooms::RoomCommandService,
        },
        ports::ClockPort,
        queries::{
            bookings::BookingQueryService, guests::GuestQueryService, rooms::RoomQueryService,
        },
    },
    domain::{booking::BookingRepository, guest::GuestRepository, room::RoomRepository},
};

pub struct ApplicationServices {
    pub room_commands: Arc<RoomCommandService>,
    pub room_queries: Arc<RoomQueryService>,
    pub guest_commands: Arc<GuestCommandService>,
    pub guest_queries: Arc<GuestQueryService>,
    pub booking_commands: Arc<BookingCommandService>,
    pub booking_queries: Arc<BookingQueryService>,
}

impl ApplicationServices {
    pub fn new(
        room_repo: Arc<dyn RoomRepository>,
        guest_repo: Arc<dyn GuestRepository>,
        booking_repo: Arc<dyn BookingRepository>,
        clock: Arc<ClockPort>,
    ) -> Self {
        let room_commands = Arc::new(RoomCommandService::new(
            Arc::clone(&room_repo),
            Arc::clone(&clock),
        ));
        let room_queries = Arc::new(RoomQueryService::new(Arc::clone(&room_repo)));

        let guest_commands = Arc::new(GuestCommandService::new(
            Arc::clone(&guest_repo),
            Arc::clone(&clock),
        ));
        let guest_queries = Arc::new(GuestQueryService::new(Arc::clone(&guest_repo)));

        let booking_commands = Arc::new(BookingCommandService::new(
            Arc::clone(&booking_repo),
            Arc::clone(&room_repo),
            Arc::clone(&guest_repo),
            Arc::clone(&clock),
        ));
        let booking_queries = Arc::new(BookingQueryService::new(Arc::clone(&booking_repo)));

        Self {
            room_commands,
            room_queries,
            guest_commands,
            guest_queries,
            booking_commands,
            booking_queries,
        }
    }
}

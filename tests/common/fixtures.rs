//! Static booking texts used across harnesses.
//!
//! Each fixture is a `&'static str` shaped like what dispatchers paste from
//! partner e-mails: `key: value` lines mixed with greetings and signatures.

/// A complete booking exercising every routing rule except extra services.
pub const BOOKING_FULL: &str = "\
Dear Operations,

Please arrange the following transfer.

Customer Account: Acme   Travel Pte Ltd
Booking Reference: BK-2024-0315
Service Type: Airport Transfer
Pick Up Date and Time: 15/3/2024 9:05
Pick Up Location: Marina Bay Sands Hotel Tower 1
Drop Off Location: Changi Airport T3
Type of Vehicle: COMBI
Passenger Details: *Mr John Tan*: +65 9123 4567
Passenger Email: john.tan@example.com
Number of Passengers: 3
Special Remarks: Meet at lobby with name board
Flight Details: SQ 321 departing 12:30
Toddler Seat: 1
PU Address Note: Tower 1 driveway
Assigned To: Lim Transport
Driver: Ali Hassan
Vehicle: SGX1234A

Thanks & regards,
Reservations Team
";

/// Only the required fields.
pub const BOOKING_MINIMAL: &str = "\
Customer Account: Acme Travel
Pick Up Date and Time: 15-3-2024 9:05
Pick Up Location: Raffles Hotel
Drop Off Location: Changi Airport T1
";

/// A forwarded booking whose key lines carry no recognised fields.
pub const BOOKING_UNRELATED: &str = "\
From: someone@example.com
Subject: Re: quote
Hi, can you quote for next week?
";

/// Required lines, used to build inputs missing exactly one of them.
pub const REQUIRED_LINES: &[(&str, &str)] = &[
    ("Customer Account: Acme Travel", "Customer name is required"),
    ("Pick Up Location: Raffles Hotel", "Pick up location is required"),
    ("Drop Off Location: Changi Airport T1", "Drop off location is required"),
];

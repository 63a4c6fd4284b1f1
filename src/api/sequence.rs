//! Request Sequencing
//!
//! Fetches are never cancelled, so responses can resolve out of order.
//! Each request draws a ticket and only the newest ticket may apply its result.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSequence {
    issued: u64,
}

impl RequestSequence {
    pub fn issue(&mut self) -> RequestTicket {
        self.issued += 1;
        RequestTicket(self.issued)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.issued
    }
}

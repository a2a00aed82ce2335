use rand::Rng;

/// Length of generated room ids
pub const ROOM_ID_LENGTH: usize = 6;

const ROOM_ID_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Trait for generating room ids
pub trait RoomIdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Short uppercase alphanumeric ids, e.g. `Q7XK2M`
pub struct RandomRoomIdGenerator;

impl RandomRoomIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomRoomIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomIdGenerator for RandomRoomIdGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();
        (0..ROOM_ID_LENGTH)
            .map(|_| ROOM_ID_CHARSET[rng.random_range(0..ROOM_ID_CHARSET.len())] as char)
            .collect()
    }
}

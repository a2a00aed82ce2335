use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use pollroom::{
    build_router,
    room::{generators::RoomIdGenerator, repository::InMemoryRoomRepository},
    token::generators::UuidTokenGenerator,
    AppState, RoomService,
};

use super::actions::TestClient;

pub const INDEX_HTML: &str = "<!doctype html><title>poll</title>";

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

/// Hands out the queued ids in order, then falls back to numbered ids
struct QueuedRoomIds {
    queue: Mutex<Vec<String>>,
    counter: Mutex<u32>,
}

impl RoomIdGenerator for QueuedRoomIds {
    fn generate(&self) -> String {
        if let Some(id) = self.queue.lock().unwrap().pop() {
            return id;
        }
        let mut counter = self.counter.lock().unwrap();
        *counter += 1;
        format!("GEN{:03}", *counter)
    }
}

pub struct TestSetup {
    pub client: TestClient,
    pub repository: Arc<InMemoryRoomRepository>,
    pub _static_dir: TempDir,
}

pub struct TestSetupBuilder {
    room_ids: Vec<String>,
    seed_rooms: Vec<(String, String)>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            room_ids: vec![],
            seed_rooms: vec![],
        }
    }

    pub fn with_room_ids(mut self, ids: Vec<&str>) -> Self {
        self.room_ids = ids.into_iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_seed_room(mut self, room_id: &str, owner: &str) -> Self {
        self.seed_rooms
            .push((room_id.to_string(), owner.to_string()));
        self
    }

    pub async fn build(self) -> TestSetup {
        let static_dir = tempfile::tempdir().unwrap();
        std::fs::write(static_dir.path().join("index.html"), INDEX_HTML).unwrap();

        let mut queue = self.room_ids;
        queue.reverse();
        let id_generator: Arc<dyn RoomIdGenerator> = Arc::new(QueuedRoomIds {
            queue: Mutex::new(queue),
            counter: Mutex::new(0),
        });

        let repository = Arc::new(InMemoryRoomRepository::new());
        let app_state = AppState::new(
            repository.clone(),
            id_generator.clone(),
            Arc::new(UuidTokenGenerator::new()),
        );

        let service = RoomService::new(repository.clone(), id_generator);
        for (room_id, owner) in self.seed_rooms {
            service.create_room_with_id(room_id, owner).await.unwrap();
        }

        let router = build_router(app_state, static_dir.path());

        TestSetup {
            client: TestClient::new(router),
            repository,
            _static_dir: static_dir,
        }
    }
}

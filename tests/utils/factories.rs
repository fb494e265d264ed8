/// Test data factories with sensible defaults
///
/// Commands built here pass validation unless a test breaks them on purpose.
use std::collections::HashSet;
use std::sync::Arc;

use vodlib::modules::catalog::infrastructure::{
    InMemoryCastMemberGateway, InMemoryCategoryGateway, InMemoryGenreGateway,
};
use vodlib::modules::catalog::{CastMemberId, CategoryId, GenreId};
use vodlib::modules::video::application::use_cases::create_video::{
    CreateVideoCommand, CreateVideoHandler,
};
use vodlib::modules::video::application::use_cases::delete_video::DeleteVideoHandler;
use vodlib::modules::video::application::use_cases::get_media::GetMediaHandler;
use vodlib::modules::video::application::use_cases::get_video::GetVideoHandler;
use vodlib::modules::video::application::use_cases::list_videos::ListVideosHandler;
use vodlib::modules::video::application::use_cases::update_media_status::UpdateMediaStatusHandler;
use vodlib::modules::video::application::use_cases::update_video::{
    UpdateVideoCommand, UpdateVideoHandler,
};
use vodlib::modules::video::domain::value_objects::{MediaType, Resource, VideoId};
use vodlib::modules::video::infrastructure::{
    InMemoryMediaResourceGateway, InMemoryVideoRepository,
};

/// A valid create command with no media attached.
pub fn valid_create_command() -> CreateVideoCommand {
    CreateVideoCommand {
        title: Some("System Design Interviews".to_string()),
        description: Some("A dive into the questions asked in big techs.".to_string()),
        launched_at: Some(2022),
        duration: 120.0,
        rating: Some("L".to_string()),
        opened: false,
        published: true,
        categories: HashSet::new(),
        genres: HashSet::new(),
        cast_members: HashSet::new(),
        video: None,
        trailer: None,
        banner: None,
        thumbnail: None,
        thumbnail_half: None,
    }
}

/// A valid update command for an existing video, no media attached.
pub fn valid_update_command(id: VideoId) -> UpdateVideoCommand {
    UpdateVideoCommand {
        id,
        title: Some("System Design Interviews 2".to_string()),
        description: Some("The follow-up season.".to_string()),
        launched_at: Some(2023),
        duration: 95.0,
        rating: Some("12".to_string()),
        opened: true,
        published: false,
        categories: HashSet::new(),
        genres: HashSet::new(),
        cast_members: HashSet::new(),
        video: None,
        trailer: None,
        banner: None,
        thumbnail: None,
        thumbnail_half: None,
    }
}

/// A resource for one media slot with a random checksum.
pub fn resource(media_type: MediaType) -> Resource {
    let checksum = format!("{:08x}", rand::random::<u32>());
    Resource::with(
        checksum,
        vec![0x1f, 0x2e, 0x3d],
        if media_type.is_audio_video() {
            "video/mp4"
        } else {
            "image/png"
        },
        format!("{}.bin", media_type),
        media_type,
    )
}

/// In-memory wiring of every port, with seedable catalog gateways.
pub struct TestContext {
    pub repository: Arc<InMemoryVideoRepository>,
    pub media_gateway: Arc<InMemoryMediaResourceGateway>,
    pub categories: Arc<InMemoryCategoryGateway>,
    pub genres: Arc<InMemoryGenreGateway>,
    pub cast_members: Arc<InMemoryCastMemberGateway>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            repository: Arc::new(InMemoryVideoRepository::new()),
            media_gateway: Arc::new(InMemoryMediaResourceGateway::new()),
            categories: Arc::new(InMemoryCategoryGateway::new()),
            genres: Arc::new(InMemoryGenreGateway::new()),
            cast_members: Arc::new(InMemoryCastMemberGateway::new()),
        }
    }

    pub fn seeded_category(&self) -> CategoryId {
        let id = CategoryId::new();
        self.categories.seed(id);
        id
    }

    pub fn seeded_genre(&self) -> GenreId {
        let id = GenreId::new();
        self.genres.seed(id);
        id
    }

    pub fn seeded_cast_member(&self) -> CastMemberId {
        let id = CastMemberId::new();
        self.cast_members.seed(id);
        id
    }

    pub fn create_handler(&self) -> CreateVideoHandler {
        CreateVideoHandler::new(
            self.repository.clone(),
            self.media_gateway.clone(),
            self.categories.clone(),
            self.genres.clone(),
            self.cast_members.clone(),
        )
    }

    pub fn update_handler(&self) -> UpdateVideoHandler {
        UpdateVideoHandler::new(
            self.repository.clone(),
            self.media_gateway.clone(),
            self.categories.clone(),
            self.genres.clone(),
            self.cast_members.clone(),
        )
    }

    pub fn get_handler(&self) -> GetVideoHandler {
        GetVideoHandler::new(self.repository.clone())
    }

    pub fn delete_handler(&self) -> DeleteVideoHandler {
        DeleteVideoHandler::new(self.repository.clone(), self.media_gateway.clone())
    }

    pub fn list_handler(&self) -> ListVideosHandler {
        ListVideosHandler::new(self.repository.clone())
    }

    pub fn get_media_handler(&self) -> GetMediaHandler {
        GetMediaHandler::new(self.media_gateway.clone())
    }

    pub fn media_status_handler(&self) -> UpdateMediaStatusHandler {
        UpdateMediaStatusHandler::new(self.repository.clone())
    }
}

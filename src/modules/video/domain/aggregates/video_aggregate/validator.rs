use crate::shared::validation::Notification;

use super::video::Video;

pub const TITLE_MAX_LENGTH: usize = 255;
pub const DESCRIPTION_MAX_LENGTH: usize = 1000;

/// Field validator for the video aggregate.
///
/// The four checks run independently so one pass reports every broken field;
/// inside a field the sub-checks (absent, blank, length) short-circuit, so a
/// field contributes at most one error. Lengths are measured after trimming.
pub struct VideoValidator<'a> {
    video: &'a Video,
}

impl<'a> VideoValidator<'a> {
    pub fn new(video: &'a Video) -> Self {
        Self { video }
    }

    pub fn validate(&self, notification: &mut Notification) {
        self.check_title(notification);
        self.check_description(notification);
        self.check_launched_at(notification);
        self.check_rating(notification);
    }

    fn check_title(&self, notification: &mut Notification) {
        let Some(title) = self.video.title() else {
            notification.append("Title cannot be null");
            return;
        };
        let trimmed = title.trim();
        if trimmed.is_empty() {
            notification.append("Title cannot be empty");
        } else if trimmed.chars().count() > TITLE_MAX_LENGTH {
            notification.append("Title too long (max 255 characters)");
        }
    }

    fn check_description(&self, notification: &mut Notification) {
        let Some(description) = self.video.description() else {
            notification.append("Description cannot be null");
            return;
        };
        let trimmed = description.trim();
        if trimmed.is_empty() {
            notification.append("Description cannot be empty");
        } else if trimmed.chars().count() > DESCRIPTION_MAX_LENGTH {
            notification.append("Description too long (max 1000 characters)");
        }
    }

    fn check_launched_at(&self, notification: &mut Notification) {
        if self.video.launched_at().is_none() {
            notification.append("Launch year cannot be null");
        }
    }

    fn check_rating(&self, notification: &mut Notification) {
        if self.video.rating().is_none() {
            notification.append("Rating cannot be null");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::video::domain::value_objects::Rating;
    use std::collections::HashSet;

    fn video_with(
        title: Option<&str>,
        description: Option<&str>,
        launched_at: Option<i32>,
        rating: Option<Rating>,
    ) -> Video {
        Video::new(
            title.map(str::to_string),
            description.map(str::to_string),
            launched_at,
            120.0,
            rating,
            false,
            true,
            HashSet::new(),
            HashSet::new(),
            HashSet::new(),
        )
    }

    fn errors_for(video: &Video) -> Vec<String> {
        let mut notification = Notification::new();
        video.validate(&mut notification);
        notification.into_errors()
    }

    #[test]
    fn valid_video_produces_no_errors() {
        let video = video_with(Some("Title"), Some("Description"), Some(2022), Some(Rating::Free));
        assert!(errors_for(&video).is_empty());
    }

    #[test]
    fn absent_title_is_reported_as_null() {
        let video = video_with(None, Some("Description"), Some(2022), Some(Rating::Free));
        assert_eq!(errors_for(&video), vec!["Title cannot be null"]);
    }

    #[test]
    fn blank_title_is_reported_as_empty() {
        let video = video_with(Some("   "), Some("Description"), Some(2022), Some(Rating::Free));
        assert_eq!(errors_for(&video), vec!["Title cannot be empty"]);
    }

    #[test]
    fn overlong_title_is_reported_once() {
        let long = "a".repeat(256);
        let video = video_with(Some(&long), Some("Description"), Some(2022), Some(Rating::Free));
        assert_eq!(errors_for(&video), vec!["Title too long (max 255 characters)"]);
    }

    #[test]
    fn title_length_is_measured_after_trim() {
        let padded = format!("  {}  ", "a".repeat(255));
        let video = video_with(Some(&padded), Some("Description"), Some(2022), Some(Rating::Free));
        assert!(errors_for(&video).is_empty());
    }

    #[test]
    fn overlong_description_is_reported() {
        let long = "d".repeat(1001);
        let video = video_with(Some("Title"), Some(&long), Some(2022), Some(Rating::Free));
        assert_eq!(
            errors_for(&video),
            vec!["Description too long (max 1000 characters)"]
        );
    }

    #[test]
    fn every_broken_field_is_reported_in_declaration_order() {
        let video = video_with(None, Some(""), None, None);
        assert_eq!(
            errors_for(&video),
            vec![
                "Title cannot be null",
                "Description cannot be empty",
                "Launch year cannot be null",
                "Rating cannot be null",
            ]
        );
    }

    #[test]
    fn validation_does_not_mutate_the_aggregate() {
        let video = video_with(None, None, None, None);
        let before = video.clone();
        let _ = errors_for(&video);
        assert_eq!(video, before);
    }
}

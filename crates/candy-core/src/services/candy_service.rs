//! Candy service - the item lifecycle.
//!
//! Couples every record mutation with the matching image-store mutation.
//! The two backends fail independently and nothing is rolled back: a
//! partial failure is logged and surfaced, leaving whatever state it left.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::domain::{
    Candy, CandyFields, CandyFilter, CandyPage, DEFAULT_PAGE_SIZE, ImageRef, ImageUpload,
    NewCandy, PageRequest,
};
use crate::ports::{CandyRepository, CoreError, ImageStore};

/// Service for candy lifecycle operations.
///
/// Receives its store and image-store handles at construction; it holds
/// no other state.
pub struct CandyService {
    repo: Arc<dyn CandyRepository>,
    images: Arc<dyn ImageStore>,
    page_size: u32,
}

impl CandyService {
    /// Create a new candy service with the default page size.
    pub fn new(repo: Arc<dyn CandyRepository>, images: Arc<dyn ImageStore>) -> Self {
        Self {
            repo,
            images,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the number of candies per listing page.
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// List one page of candies matching `filter`.
    pub async fn list(&self, page: u32, filter: CandyFilter) -> Result<CandyPage, CoreError> {
        let request = PageRequest::new(page, self.page_size);
        let items = self
            .repo
            .list(&filter, request.offset(), request.limit())
            .await?;
        let total = self.repo.count(&filter).await?;
        Ok(CandyPage::new(items, request, total, filter))
    }

    /// Get a single candy, e.g. to populate an edit form.
    pub async fn get(&self, id: i64) -> Result<Candy, CoreError> {
        self.repo.get_by_id(id).await.map_err(CoreError::from)
    }

    /// Create a candy, storing its image first if one was uploaded.
    ///
    /// A rejected upload fails the whole operation before anything is written.
    pub async fn create(
        &self,
        fields: CandyFields,
        upload: Option<ImageUpload>,
    ) -> Result<Candy, CoreError> {
        let fields = fields.normalized()?;
        let image = match upload {
            Some(upload) => self.store_upload(&upload).await?,
            None => ImageRef::placeholder(),
        };

        let candy = self
            .repo
            .insert(&NewCandy::new(fields, image, Utc::now()))
            .await?;

        info!(candy_id = candy.id, image = %candy.image, "Created candy");
        Ok(candy)
    }

    /// Update a candy's fields, replacing its image only if a new one is uploaded.
    ///
    /// The replaced image file is left in the store.
    pub async fn update(
        &self,
        id: i64,
        fields: CandyFields,
        upload: Option<ImageUpload>,
    ) -> Result<Candy, CoreError> {
        let mut candy = self.repo.get_by_id(id).await?;
        let fields = fields.normalized()?;

        let image = match upload {
            Some(upload) => {
                let image = self.store_upload(&upload).await?;
                if !candy.image.is_placeholder() {
                    debug!(
                        candy_id = id,
                        previous = %candy.image,
                        "Replaced image left in store"
                    );
                }
                image
            }
            None => candy.image.clone(),
        };

        candy.apply(fields, image);
        self.repo.update(&candy).await?;

        info!(candy_id = candy.id, image = %candy.image, "Updated candy");
        Ok(candy)
    }

    /// Delete a candy and its image file. Returns the removed candy.
    ///
    /// The placeholder image is never touched. Failing to remove the image
    /// file is logged and does not stop the record from being deleted.
    pub async fn delete(&self, id: i64) -> Result<Candy, CoreError> {
        let candy = self.repo.get_by_id(id).await?;

        if !candy.image.is_placeholder() {
            self.remove_image(id, &candy.image).await;
        }

        self.repo.delete(id).await?;

        info!(candy_id = id, "Deleted candy");
        Ok(candy)
    }

    async fn store_upload(&self, upload: &ImageUpload) -> Result<ImageRef, CoreError> {
        let extension = upload.validate()?;
        let name = ImageRef::generate(&extension);
        self.images.save(&name, &upload.bytes).await?;

        debug!(
            image = %name,
            original = %upload.original_filename,
            size = upload.bytes.len(),
            "Stored uploaded image"
        );
        Ok(name)
    }

    async fn remove_image(&self, id: i64, image: &ImageRef) {
        match self.images.exists(image).await {
            Ok(true) => match self.images.delete(image).await {
                Ok(()) => info!(candy_id = id, image = %image, "Removed image"),
                Err(e) => warn!(candy_id = id, image = %image, error = %e, "Failed to remove image"),
            },
            Ok(false) => warn!(candy_id = id, image = %image, "Image already missing"),
            Err(e) => warn!(candy_id = id, image = %image, error = %e, "Failed to check image"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_IMAGE;
    use crate::ports::{ImageStoreError, RepositoryError};
    use async_trait::async_trait;
    use mockall::mock;
    use std::sync::Mutex;

    struct MockRepo {
        candies: Mutex<Vec<Candy>>,
    }

    impl MockRepo {
        fn new() -> Self {
            Self {
                candies: Mutex::new(vec![]),
            }
        }
    }

    #[async_trait]
    impl CandyRepository for MockRepo {
        async fn list(
            &self,
            filter: &CandyFilter,
            offset: u64,
            limit: u32,
        ) -> Result<Vec<Candy>, RepositoryError> {
            Ok(self
                .candies
                .lock()
                .unwrap()
                .iter()
                .filter(|c| filter.matches(c))
                .skip(usize::try_from(offset).unwrap())
                .take(limit as usize)
                .cloned()
                .collect())
        }

        async fn count(&self, filter: &CandyFilter) -> Result<u64, RepositoryError> {
            let candies = self.candies.lock().unwrap();
            Ok(candies.iter().filter(|c| filter.matches(c)).count() as u64)
        }

        async fn get_by_id(&self, id: i64) -> Result<Candy, RepositoryError> {
            self.candies
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.id == id)
                .cloned()
                .ok_or_else(|| RepositoryError::NotFound(format!("id={id}")))
        }

        #[allow(clippy::significant_drop_tightening)]
        async fn insert(&self, candy: &NewCandy) -> Result<Candy, RepositoryError> {
            let mut candies = self.candies.lock().unwrap();
            let id = candies.iter().map(|c| c.id).max().unwrap_or(0) + 1;
            let created = Candy {
                id,
                name: candy.name.clone(),
                kind: candy.kind.clone(),
                description: candy.description.clone(),
                image: candy.image.clone(),
                created_at: candy.created_at,
            };
            candies.push(created.clone());
            Ok(created)
        }

        async fn update(&self, candy: &Candy) -> Result<(), RepositoryError> {
            let mut candies = self.candies.lock().unwrap();
            candies.iter_mut().find(|c| c.id == candy.id).map_or_else(
                || Err(RepositoryError::NotFound(format!("id={}", candy.id))),
                |c| {
                    c.clone_from(candy);
                    Ok(())
                },
            )
        }

        async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
            let mut candies = self.candies.lock().unwrap();
            let len_before = candies.len();
            candies.retain(|c| c.id != id);
            if candies.len() == len_before {
                Err(RepositoryError::NotFound(format!("id={id}")))
            } else {
                Ok(())
            }
        }
    }

    mock! {
        Images {}

        #[async_trait]
        impl ImageStore for Images {
            async fn save(&self, name: &ImageRef, bytes: &[u8]) -> Result<(), ImageStoreError>;
            async fn delete(&self, name: &ImageRef) -> Result<(), ImageStoreError>;
            async fn exists(&self, name: &ImageRef) -> Result<bool, ImageStoreError>;
        }
    }

    fn service(repo: Arc<MockRepo>, images: MockImages) -> CandyService {
        CandyService::new(repo, Arc::new(images))
    }

    fn gum() -> CandyFields {
        CandyFields::new("Gum", "candy", "mint")
    }

    fn png() -> ImageUpload {
        ImageUpload::new("photo.png", "image/png", vec![0x89, b'P', b'N', b'G'])
    }

    #[tokio::test]
    async fn test_create_without_upload_uses_placeholder() {
        let mut images = MockImages::new();
        images.expect_save().never();
        let service = service(Arc::new(MockRepo::new()), images);

        let candy = service.create(gum(), None).await.unwrap();
        assert_eq!(candy.image.as_str(), DEFAULT_IMAGE);
        assert_eq!(candy.name, "Gum");
    }

    #[tokio::test]
    async fn test_create_with_png_stores_generated_name() {
        let mut images = MockImages::new();
        images
            .expect_save()
            .withf(|name, bytes| name.as_str().ends_with(".png") && bytes.len() == 4)
            .times(1)
            .returning(|_, _| Ok(()));
        let service = service(Arc::new(MockRepo::new()), images);

        let candy = service.create(gum(), Some(png())).await.unwrap();
        assert!(candy.image.as_str().ends_with(".png"));
        assert_ne!(candy.image.as_str(), "photo.png");
        assert!(!candy.image.is_placeholder());
    }

    #[tokio::test]
    async fn test_create_with_text_file_persists_nothing() {
        let mut images = MockImages::new();
        images.expect_save().never();
        let repo = Arc::new(MockRepo::new());
        let service = service(repo.clone(), images);

        let upload = ImageUpload::new("notes.txt", "text/plain", b"hello".to_vec());
        let err = service.create(gum(), Some(upload)).await.unwrap_err();

        assert!(matches!(err, CoreError::Upload(_)));
        assert!(err.is_validation());
        assert!(repo.candies.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_requires_name() {
        let mut images = MockImages::new();
        images.expect_save().never();
        let service = service(Arc::new(MockRepo::new()), images);

        let err = service
            .create(CandyFields::new("", "candy", ""), Some(png()))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_fails_when_image_store_fails() {
        let mut images = MockImages::new();
        images
            .expect_save()
            .returning(|_, _| Err(ImageStoreError::Io("disk full".to_string())));
        let repo = Arc::new(MockRepo::new());
        let service = service(repo.clone(), images);

        let err = service.create(gum(), Some(png())).await.unwrap_err();
        assert!(matches!(err, CoreError::ImageStore(_)));
        assert!(repo.candies.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_paginates_and_counts() {
        let images = MockImages::new();
        let service = service(Arc::new(MockRepo::new()), images);
        for i in 0..12 {
            service
                .create(CandyFields::new(format!("Candy {i}"), "candy", ""), None)
                .await
                .unwrap();
        }

        let first = service.list(1, CandyFilter::all()).await.unwrap();
        assert_eq!(first.items.len(), 5);
        assert_eq!(first.total, 12);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.items[0].name, "Candy 0");

        let last = service.list(3, CandyFilter::all()).await.unwrap();
        assert_eq!(last.items.len(), 2);
        assert_eq!(last.items[0].name, "Candy 10");

        let beyond = service.list(9, CandyFilter::all()).await.unwrap();
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total_pages, 3);
    }

    #[tokio::test]
    async fn test_list_filters_by_kind() {
        let service = service(Arc::new(MockRepo::new()), MockImages::new());
        service
            .create(CandyFields::new("Gum", "gum", ""), None)
            .await
            .unwrap();
        service
            .create(CandyFields::new("Bar", "chocolate", ""), None)
            .await
            .unwrap();
        service
            .create(CandyFields::new("Mint gum", "gum", ""), None)
            .await
            .unwrap();

        let page = service.list(1, CandyFilter::by_kind("gum")).await.unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.iter().all(|c| c.kind == "gum"));
        assert_eq!(page.filter, CandyFilter::by_kind("gum"));
    }

    #[tokio::test]
    async fn test_custom_page_size() {
        let service = service(Arc::new(MockRepo::new()), MockImages::new()).with_page_size(2);
        for name in ["a", "b", "c"] {
            service
                .create(CandyFields::new(name, "candy", ""), None)
                .await
                .unwrap();
        }

        let page = service.list(1, CandyFilter::all()).await.unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_pages, 2);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let service = service(Arc::new(MockRepo::new()), MockImages::new());
        let err = service.get(42).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_without_upload_keeps_image() {
        let mut images = MockImages::new();
        images.expect_save().times(1).returning(|_, _| Ok(()));
        let service = service(Arc::new(MockRepo::new()), images);

        let created = service.create(gum(), Some(png())).await.unwrap();
        let updated = service
            .update(
                created.id,
                CandyFields::new("Spearmint", "gum", "fresh"),
                None,
            )
            .await
            .unwrap();

        assert_eq!(updated.image, created.image);
        assert_eq!(updated.name, "Spearmint");
        assert_eq!(updated.kind, "gum");
        assert_eq!(updated.created_at, created.created_at);

        let stored = service.get(created.id).await.unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_update_with_upload_replaces_image_without_deleting_old() {
        let mut images = MockImages::new();
        images.expect_save().times(2).returning(|_, _| Ok(()));
        images.expect_delete().never();
        let service = service(Arc::new(MockRepo::new()), images);

        let created = service.create(gum(), Some(png())).await.unwrap();
        let gif = ImageUpload::new("new.GIF", "image/gif", vec![1]);
        let updated = service.update(created.id, gum(), Some(gif)).await.unwrap();

        assert_ne!(updated.image, created.image);
        assert!(updated.image.as_str().ends_with(".gif"));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let mut images = MockImages::new();
        images.expect_save().never();
        let service = service(Arc::new(MockRepo::new()), images);

        let err = service.update(7, gum(), Some(png())).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_missing_with_blank_name_is_not_found() {
        let service = service(Arc::new(MockRepo::new()), MockImages::new());

        let err = service
            .update(7, CandyFields::new("   ", "gum", ""), None)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_blank_name_is_validation_error() {
        let service = service(Arc::new(MockRepo::new()), MockImages::new());
        let created = service.create(gum(), None).await.unwrap();

        let err = service
            .update(created.id, CandyFields::new("", "gum", ""), None)
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(service.get(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_update_with_bad_upload_leaves_record_untouched() {
        let service = service(Arc::new(MockRepo::new()), MockImages::new());
        let created = service.create(gum(), None).await.unwrap();

        let bad = ImageUpload::new("evil.svg", "image/svg+xml", vec![1]);
        let err = service
            .update(created.id, CandyFields::new("Other", "x", ""), Some(bad))
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(service.get(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_delete_placeholder_never_touches_store() {
        let mut images = MockImages::new();
        images.expect_exists().never();
        images.expect_delete().never();
        let service = service(Arc::new(MockRepo::new()), images);

        let created = service.create(gum(), None).await.unwrap();
        service.delete(created.id).await.unwrap();

        assert!(service.get(created.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_removes_record_and_file() {
        let mut images = MockImages::new();
        images.expect_save().returning(|_, _| Ok(()));
        images.expect_exists().times(1).returning(|_| Ok(true));
        images.expect_delete().times(1).returning(|_| Ok(()));
        let service = service(Arc::new(MockRepo::new()), images);

        let created = service.create(gum(), Some(png())).await.unwrap();
        let removed = service.delete(created.id).await.unwrap();

        assert_eq!(removed.id, created.id);
        assert!(service.get(created.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_with_missing_file_still_deletes_record() {
        let mut images = MockImages::new();
        images.expect_save().returning(|_, _| Ok(()));
        images.expect_exists().returning(|_| Ok(false));
        images.expect_delete().never();
        let service = service(Arc::new(MockRepo::new()), images);

        let created = service.create(gum(), Some(png())).await.unwrap();
        service.delete(created.id).await.unwrap();

        assert!(service.get(created.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_swallows_file_errors() {
        let mut images = MockImages::new();
        images.expect_save().returning(|_, _| Ok(()));
        images.expect_exists().returning(|_| Ok(true));
        images
            .expect_delete()
            .returning(|_| Err(ImageStoreError::Io("permission denied".to_string())));
        let service = service(Arc::new(MockRepo::new()), images);

        let created = service.create(gum(), Some(png())).await.unwrap();
        assert!(service.delete(created.id).await.is_ok());
        assert!(service.get(created.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let mut images = MockImages::new();
        images.expect_exists().never();
        let service = service(Arc::new(MockRepo::new()), images);

        let err = service.delete(99).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_scenario_create_list_delete() {
        let mut images = MockImages::new();
        images.expect_save().never();
        images.expect_exists().never();
        images.expect_delete().never();
        let service = service(Arc::new(MockRepo::new()), images);

        let created = service.create(gum(), None).await.unwrap();
        assert_eq!(created.image.as_str(), DEFAULT_IMAGE);

        let page = service.list(1, CandyFilter::all()).await.unwrap();
        assert!(page.items.iter().any(|c| c.id == created.id));

        service.delete(created.id).await.unwrap();
        let page = service.list(1, CandyFilter::all()).await.unwrap();
        assert!(page.items.iter().all(|c| c.id != created.id));
        assert_eq!(page.total, 0);
    }
}

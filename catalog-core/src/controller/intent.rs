//! Intent dispatch

use catalog_client::CatalogTransport;
use shared::ListingIntent;

use super::{ListingController, ListingResult};

impl<T: CatalogTransport + ?Sized> ListingController<T> {
    /// Route a presentation-layer intent to the matching operation
    pub async fn dispatch(&self, intent: ListingIntent) -> ListingResult<()> {
        if intent.is_mutation() {
            tracing::debug!(intent = intent.name(), "Dispatching mutation intent");
        } else {
            tracing::trace!(intent = intent.name(), "Dispatching view intent");
        }
        match intent {
            ListingIntent::Create(request) => self.create(&request).await.map(|_| ()),
            ListingIntent::Update { id, request } => self.update(&id, &request).await.map(|_| ()),
            ListingIntent::Delete { id } => self.delete(&id).await,
            ListingIntent::Edit { id } => self.begin_edit_by_id(&id),
            ListingIntent::CancelEdit => {
                self.cancel_edit();
                Ok(())
            }
            ListingIntent::Refresh => self.refresh().await.map(|_| ()),
        }
    }
}

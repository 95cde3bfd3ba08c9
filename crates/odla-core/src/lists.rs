use crate::catalog::{paginate, Page};
use crate::error::CoreError;
use crate::models::{PlantListItem, UserContext};
use crate::repository::Repository;
use std::fmt;

/// The two per-user plant lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Garden,
    Wishlist,
}

impl ListKind {
    pub fn title(self) -> &'static str {
        match self {
            ListKind::Garden => "Trädgården",
            ListKind::Wishlist => "Önskelistan",
        }
    }

    pub async fn plant_ids<R: Repository>(self, repo: &R, ctx: &UserContext) -> Result<Vec<i64>, CoreError> {
        match self {
            ListKind::Garden => repo.find_garden_plant_ids(ctx.user_id).await,
            ListKind::Wishlist => repo.find_wishlist_plant_ids(ctx.user_id).await,
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Pages over the list's plant ids first, then loads details for just that page.
pub async fn load_list_page<R: Repository>(
    repo: &R,
    ctx: &UserContext,
    kind: ListKind,
    page: usize,
    per_page: usize,
) -> Result<Page<PlantListItem>, CoreError> {
    let ids = kind.plant_ids(repo, ctx).await?;
    let id_page = paginate(&ids, page, per_page);
    let items = repo.find_plant_list_items_by_ids(&id_page.items).await?;

    Ok(Page {
        items,
        page: id_page.page,
        page_count: id_page.page_count,
        total: id_page.total,
    })
}

/// Removes a plant from either list.
pub async fn remove_from_list<R: Repository>(
    repo: &R,
    ctx: &UserContext,
    kind: ListKind,
    plant_id: i64,
) -> Result<(), CoreError> {
    match kind {
        ListKind::Garden => repo.remove_plant_from_garden(ctx.user_id, plant_id).await,
        ListKind::Wishlist => {
            if !repo.is_plant_on_wishlist(ctx.user_id, plant_id).await? {
                return Err(CoreError::NotFound(format!(
                    "Plant {plant_id} is not on your wishlist"
                )));
            }
            repo.toggle_wishlist(ctx.user_id, plant_id, true).await.map(|_| ())
        }
    }
}

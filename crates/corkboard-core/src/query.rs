//! Read-model assembly: joins across the three registries at read time.
//!
//! Nothing in this module is stored. A listing row's comment count is
//! recomputed on every call, the writer's profile image is resolved against
//! the identity registry as it is now, and a comment's author nickname
//! reflects the author's current account -- or the configured label when the
//! account is gone.

use corkboard_store::StoreError;
use corkboard_types::{CommentView, PostDetail, PostId, PostSummary, UserId};

use crate::board::BoardState;
use crate::config::BoardConfig;

/// One page of post summaries, in creation order.
///
/// Rejects `page` or `size` below 1 with [`StoreError::InvalidPagination`]:
/// out-of-range parameters are a contract violation answered explicitly, not
/// an empty listing. A page past the end of a valid range is still empty,
/// never an error.
pub fn posts_page(
    state: &BoardState,
    page: u64,
    size: u64,
) -> Result<Vec<PostSummary>, StoreError> {
    if page == 0 || size == 0 {
        return Err(StoreError::InvalidPagination { page, size });
    }

    let summaries = state
        .content
        .page(page, size)
        .into_iter()
        .map(|post| {
            let comment_count = state.engagement.comment_count(post.id);
            let writer_profile_image = state
                .identity
                .profile_image_by_nickname(&post.writer)
                .map(str::to_owned);
            PostSummary::from_post(post, comment_count, writer_profile_image)
        })
        .collect();
    Ok(summaries)
}

/// Detail view of a post, personalized for one viewer.
///
/// Bumps the post's view count as a side effect of the successful read, then
/// attaches the viewer's like state and the writer's profile image.
pub fn post_detail(
    state: &mut BoardState,
    post: PostId,
    viewer: UserId,
) -> Result<PostDetail, StoreError> {
    let is_liked = state.engagement.is_liked(viewer, post);
    let row = state.content.read(post)?;
    let writer_profile_image = state
        .identity
        .profile_image_by_nickname(&row.writer)
        .map(str::to_owned);
    Ok(PostDetail::from_post(row, is_liked, writer_profile_image))
}

/// Comments on a post, in creation order, with author nicknames resolved at
/// read time.
///
/// Fails with [`StoreError::PostNotFound`] if the post does not exist.
/// Authors whose accounts are gone are shown under the configured
/// deleted-author label.
pub fn comments(
    state: &BoardState,
    config: &BoardConfig,
    post: PostId,
) -> Result<Vec<CommentView>, StoreError> {
    if state.content.get(post).is_none() {
        return Err(StoreError::PostNotFound(post));
    }

    let views = state
        .engagement
        .comments_for(post)
        .into_iter()
        .map(|comment| CommentView {
            id: comment.id,
            nickname: state
                .identity
                .nickname(comment.author)
                .unwrap_or(&config.deleted_author_label)
                .to_owned(),
            content: comment.content.clone(),
            created_at: comment.created_at,
        })
        .collect();
    Ok(views)
}

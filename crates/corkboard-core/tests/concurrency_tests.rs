//! Concurrency tests for the board's single-writer discipline.
//!
//! Each test hammers one board from several threads, then checks the
//! invariants that a lost update, a duplicate like row, or a half-applied
//! cascade would break. The assertions run after every thread has joined,
//! so they observe the final state through the same public reads any caller
//! would use.

#![allow(clippy::unwrap_used)]

use std::thread;

use corkboard_core::Board;
use corkboard_types::{NewPost, NewUser, PostId, UserId};

fn new_user(email: &str, nickname: &str) -> NewUser {
    NewUser {
        email: email.to_owned(),
        password: String::from("password-1"),
        nickname: nickname.to_owned(),
        profile_image: None,
    }
}

fn new_post(title: &str) -> NewPost {
    NewPost {
        title: title.to_owned(),
        content: String::from("body"),
        image_url: None,
    }
}

fn board_with_post() -> (Board, UserId, PostId) {
    let board = Board::new();
    let writer = board.signup(new_user("w@example.com", "writer")).unwrap().id;
    let post = board.create_post(writer, new_post("contested")).unwrap().id;
    (board, writer, post)
}

#[test]
fn same_pair_toggles_never_lose_updates() {
    let (board, user, post) = board_with_post();
    let board = &board;

    // 4 threads x 25 toggles = 100 toggles of one (user, post) pair. Every
    // toggle must land: an even total means the pair ends unliked with the
    // counter back at zero. A lost update or duplicate row breaks parity.
    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(move || {
                for _ in 0..25 {
                    board.toggle_like(post, user).unwrap();
                }
            });
        }
    });

    assert!(!board.is_liked(user, post));
    assert_eq!(board.like_count(post), 0);
    assert_eq!(board.like_rows(), 0);
}

#[test]
fn odd_number_of_same_pair_toggles_ends_liked() {
    let (board, user, post) = board_with_post();
    let board = &board;

    thread::scope(|s| {
        for _ in 0..5 {
            s.spawn(move || {
                board.toggle_like(post, user).unwrap();
            });
        }
    });

    assert!(board.is_liked(user, post));
    assert_eq!(board.like_count(post), 1);
    assert_eq!(board.like_rows(), 1);
}

#[test]
fn distinct_pairs_all_land_exactly_once() {
    let (board, _, post) = board_with_post();
    let users: Vec<UserId> = (0..8)
        .map(|i| {
            board
                .signup(new_user(&format!("fan{i}@example.com"), &format!("fan{i}")))
                .unwrap()
                .id
        })
        .collect();
    let board = &board;

    thread::scope(|s| {
        for user in &users {
            let user = *user;
            s.spawn(move || {
                board.toggle_like(post, user).unwrap();
            });
        }
    });

    assert_eq!(board.like_count(post), 8);
    assert_eq!(board.like_rows(), 8);
    for user in users {
        assert!(board.is_liked(user, post));
    }
}

#[test]
fn cascade_racing_engagement_leaves_no_orphans() {
    let (board, writer, post) = board_with_post();
    let fans: Vec<UserId> = (0..4)
        .map(|i| {
            board
                .signup(new_user(&format!("fan{i}@example.com"), &format!("fan{i}")))
                .unwrap()
                .id
        })
        .collect();
    let board = &board;

    // Fans toggle and comment while the writer deletes the post. Engagement
    // attempts after the cascade fail with a missing post; attempts before
    // it are swept by the cascade. Either way, nothing may dangle.
    thread::scope(|s| {
        for fan in &fans {
            let fan = *fan;
            s.spawn(move || {
                for _ in 0..10 {
                    let _ = board.toggle_like(post, fan);
                    let _ = board.add_comment(post, fan, String::from("racing"));
                }
            });
        }
        s.spawn(move || {
            board.delete_post(post, writer).unwrap();
        });
    });

    assert!(board.post_detail(post, writer).unwrap_err().is_not_found());
    assert_eq!(board.like_rows(), 0);
    assert_eq!(board.comment_rows(), 0);
    assert_eq!(board.like_count(post), 0);
}

#[test]
fn duplicate_email_race_admits_exactly_one_winner() {
    let board = Board::new();
    let board = &board;

    let outcomes: Vec<bool> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(move || board.signup(new_user("same@example.com", "same")).is_ok()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let winners = outcomes.iter().filter(|ok| **ok).count();
    assert_eq!(winners, 1);
    assert_eq!(board.user_count(), 1);
}

#[test]
fn concurrent_signups_get_unique_ids() {
    let board = Board::new();
    let board = &board;

    let mut ids: Vec<u64> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                s.spawn(move || {
                    board
                        .signup(new_user(&format!("u{i}@example.com"), &format!("u{i}")))
                        .unwrap()
                        .id
                        .into_inner()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    ids.sort_unstable();
    let expected: Vec<u64> = (1..=8).collect();
    assert_eq!(ids, expected);
}

//! Integration tests for the post edit flow.

use std::{cell::RefCell, rc::Rc};

use anyhow::Result;
use async_trait::async_trait;
use post_editor_shared::{
    load_post, CacheKey, Draft, EditForm, FieldEdit, FormEvent, FormPhase, InvalidationBus,
    LoadState, Notification, Post, PostId, PostLoader, PostsApi, SubmitError, Submitter,
    UpdatePostRequest, Variant,
};

/// Records every call in order so tests can assert on side-effect ordering.
#[derive(Clone, Default)]
struct Journal(Rc<RefCell<Vec<String>>>);

impl Journal {
    fn push(&self, entry: impl Into<String>) {
        self.0.borrow_mut().push(entry.into());
    }

    fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

struct FakeApi {
    post: Post,
    fail_update: bool,
    updates: RefCell<Vec<(PostId, UpdatePostRequest)>>,
    journal: Journal,
}

impl FakeApi {
    fn new(journal: &Journal) -> Self {
        Self {
            post: Post {
                id: 1,
                title: "Hello".to_string(),
                content: "World".to_string(),
                category_id: 7,
            },
            fail_update: false,
            updates: RefCell::new(Vec::new()),
            journal: journal.clone(),
        }
    }

    fn failing(journal: &Journal) -> Self {
        Self {
            fail_update: true,
            ..Self::new(journal)
        }
    }
}

#[async_trait(?Send)]
impl<'a> PostsApi for &'a FakeApi {
    async fn fetch_post(&self, id: PostId) -> Result<Post, String> {
        self.journal.push(format!("fetch {id}"));
        if id == self.post.id {
            Ok(self.post.clone())
        } else {
            Err("HTTP error: 404".to_string())
        }
    }

    async fn update_post(&self, id: PostId, body: &UpdatePostRequest) -> Result<(), String> {
        self.journal.push(format!("update {id}"));
        self.updates.borrow_mut().push((id, body.clone()));
        if self.fail_update {
            Err("Network error: connection refused".to_string())
        } else {
            Ok(())
        }
    }
}

/// Form held the way a UI reducer would hold it.
#[derive(Clone)]
struct FormCell {
    form: Rc<RefCell<EditForm>>,
    journal: Journal,
}

impl FormCell {
    fn new(form: EditForm, journal: &Journal) -> Self {
        Self {
            form: Rc::new(RefCell::new(form)),
            journal: journal.clone(),
        }
    }

    fn dispatcher(&self) -> impl Fn(FormEvent) + '_ {
        move |event| {
            if event == FormEvent::Reset {
                self.journal.push("reset");
            }
            let current = self.form.borrow().clone();
            *self.form.borrow_mut() = current.transition(event);
        }
    }

    fn get(&self) -> EditForm {
        self.form.borrow().clone()
    }
}

fn sink(journal: &Journal, seen: &Rc<RefCell<Vec<Notification>>>) -> impl Fn(Notification) {
    let journal = journal.clone();
    let seen = seen.clone();
    move |n: Notification| {
        journal.push(if n.is_destructive() { "notify error" } else { "notify success" });
        seen.borrow_mut().push(n);
    }
}

fn listing_listener(bus: &InvalidationBus, journal: &Journal) -> post_editor_shared::Subscription {
    let journal = journal.clone();
    bus.subscribe(CacheKey::Posts, move |key| journal.push(format!("invalidate {key}")))
}

async fn loaded_form(api: &FakeApi) -> Result<EditForm> {
    let state = load_post(&api, 1).await;
    let post = state
        .ready()
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("post 1 should load"))?;
    Ok(EditForm::new().transition(FormEvent::Loaded(post)))
}

#[tokio::test]
async fn load_populates_draft() -> Result<()> {
    let journal = Journal::default();
    let api = FakeApi::new(&journal);
    let form = loaded_form(&api).await?;

    assert_eq!(
        form.draft(),
        &Draft {
            title: "Hello".to_string(),
            content: "World".to_string(),
            category_id: "7".to_string(),
        }
    );
    assert_eq!(form.char_count(), 5);
    assert_eq!(form.phase(), FormPhase::Populated);
    Ok(())
}

#[tokio::test]
async fn load_failure_leaves_form_uninitialized() {
    let journal = Journal::default();
    let api = FakeApi::new(&journal);
    let mut loader = PostLoader::new();

    assert!(loader.begin(42));
    let state = load_post(&&api, 42).await;
    assert_eq!(state, LoadState::Failed("HTTP error: 404".to_string()));
    assert!(!loader.begin(42), "same id must not be fetched twice");

    let form = EditForm::new();
    assert_eq!(form.phase(), FormPhase::Uninitialized);
    assert_eq!(journal.entries(), vec!["fetch 42"]);
}

#[tokio::test]
async fn invalid_draft_is_rejected_without_request() {
    let journal = Journal::default();
    let api = FakeApi::new(&journal);
    let bus = InvalidationBus::new();
    let _listing = listing_listener(&bus, &journal);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let submitter = Submitter::new(1, &api, sink(&journal, &seen), bus.clone());

    let cell = FormCell::new(EditForm::new(), &journal);
    for edit in [
        FieldEdit::Title(String::new()),
        FieldEdit::Content("x".to_string()),
        FieldEdit::CategoryId("1".to_string()),
    ] {
        (cell.dispatcher())(FormEvent::Edited(edit));
    }
    let draft = cell.get().draft().clone();

    // Submitting the same invalid draft twice behaves identically.
    for _ in 0..2 {
        let err = submitter
            .submit(draft.clone(), cell.dispatcher())
            .await
            .expect_err("empty title must be rejected");
        assert!(matches!(err, SubmitError::Invalid(ref v) if v.len() == 1));
        assert_eq!(cell.get().phase(), FormPhase::Invalid);
        assert_eq!(cell.get().draft(), &draft);
    }

    assert!(api.updates.borrow().is_empty());
    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert!(seen.iter().all(|n| n.variant == Some(Variant::Destructive)));
    assert_eq!(seen[0].description, "form is not valid");
    assert_eq!(journal.entries(), vec!["notify error", "notify error"]);
}

#[tokio::test]
async fn every_empty_field_blocks_submission() {
    let journal = Journal::default();
    let api = FakeApi::new(&journal);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let submitter = Submitter::new(1, &api, sink(&journal, &seen), InvalidationBus::new());

    let drafts = [("", "c", "1"), ("t", "", "1"), ("t", "c", "")];
    for (title, content, category_id) in drafts {
        let draft = Draft {
            title: title.to_string(),
            content: content.to_string(),
            category_id: category_id.to_string(),
        };
        let result = submitter.submit(draft, |_| {}).await;
        assert!(matches!(result, Err(SubmitError::Invalid(_))));
    }
    assert!(api.updates.borrow().is_empty());
}

#[tokio::test]
async fn successful_update_invalidates_resets_then_notifies() -> Result<()> {
    let journal = Journal::default();
    let api = FakeApi::new(&journal);
    let bus = InvalidationBus::new();
    let _listing = listing_listener(&bus, &journal);
    let filtered_hits = Rc::new(RefCell::new(0));
    let _filtered = {
        let hits = filtered_hits.clone();
        bus.subscribe(CacheKey::PostsByCategory(7), move |_| *hits.borrow_mut() += 1)
    };
    let seen = Rc::new(RefCell::new(Vec::new()));
    let submitter = Submitter::new(1, &api, sink(&journal, &seen), bus.clone());

    let cell = FormCell::new(loaded_form(&api).await?, &journal);
    (cell.dispatcher())(FormEvent::Edited(FieldEdit::Title("Hello again".to_string())));
    let draft = cell.get().draft().clone();

    submitter.submit(draft, cell.dispatcher()).await?;

    let updates = api.updates.borrow();
    assert_eq!(updates.len(), 1);
    assert_eq!(
        updates[0],
        (
            1,
            UpdatePostRequest {
                title: "Hello again".to_string(),
                content: "World".to_string(),
                category_id: "7".to_string(),
            }
        )
    );

    let form = cell.get();
    assert_eq!(form.draft(), &Draft::default());
    assert_eq!(form.char_count(), 0);
    assert!(form.counter().is_none());
    assert_eq!(*filtered_hits.borrow(), 0);

    assert_eq!(
        journal.entries(),
        vec!["fetch 1", "update 1", "invalidate posts", "reset", "notify success"]
    );
    assert!(!seen.borrow()[0].is_destructive());
    Ok(())
}

#[tokio::test]
async fn failed_update_keeps_draft() -> Result<()> {
    let journal = Journal::default();
    let api = FakeApi::failing(&journal);
    let bus = InvalidationBus::new();
    let _listing = listing_listener(&bus, &journal);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let submitter = Submitter::new(1, &api, sink(&journal, &seen), bus.clone());

    let cell = FormCell::new(loaded_form(&api).await?, &journal);
    (cell.dispatcher())(FormEvent::Edited(FieldEdit::Content("Edited body".to_string())));
    let before = cell.get();

    let err = submitter
        .submit(before.draft().clone(), cell.dispatcher())
        .await
        .expect_err("network failure propagates");
    assert_eq!(err, SubmitError::Request("Network error: connection refused".to_string()));

    let after = cell.get();
    assert_eq!(after.draft(), before.draft());
    assert_eq!(after.char_count(), 11);
    assert_eq!(journal.entries(), vec!["fetch 1", "update 1", "notify error"]);
    assert_eq!(seen.borrow()[0].variant, Some(Variant::Destructive));
    Ok(())
}

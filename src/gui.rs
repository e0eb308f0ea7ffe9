use iced::{
    Element, Length, Task, Color, Alignment, Border,
};
use iced::widget::{
    Column, Row, Container, Text, Button, Checkbox, PickList, Slider, TextInput, Scrollable, Space, rule,
};

use crate::config::Config;
use crate::error::StoreError;
use crate::models::*;
use crate::practice;
use crate::storage;
use crate::utils;
use std::fmt;
use std::path::PathBuf;
use rfd::FileDialog;
use tokio::task;
use tracing::{error, info, warn};

const DEFAULT_CONFIDENCE: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    TrackWords,
    PracticeWords,
}

impl Page {
    pub fn all() -> Vec<Page> {
        vec![Page::TrackWords, Page::PracticeWords]
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::TrackWords => write!(f, "Track Words"),
            Page::PracticeWords => write!(f, "Practice Words"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    fn palette(&self) -> Palette {
        match self {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }
}

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Palette {
    background: Color,
    sidebar: Color,
    panel: Color,
    border: Color,
    text: Color,
    muted: Color,
    faint: Color,
    accent: Color,
    success: Color,
    warning: Color,
    danger: Color,
}

const fn rgb(r: f32, g: f32, b: f32) -> Color {
    Color { r, g, b, a: 1.0 }
}

const LIGHT: Palette = Palette {
    background: rgb(1.0, 0.99, 0.97),
    sidebar: rgb(0.96, 0.95, 0.92),
    panel: rgb(0.97, 0.96, 0.94),
    border: rgb(0.82, 0.8, 0.76),
    text: rgb(0.12, 0.11, 0.1),
    muted: rgb(0.4, 0.38, 0.36),
    faint: rgb(0.55, 0.53, 0.5),
    accent: rgb(0.25, 0.66, 0.58),
    success: rgb(0.2, 0.6, 0.3),
    warning: rgb(0.85, 0.55, 0.1),
    danger: rgb(0.8, 0.2, 0.2),
};

const DARK: Palette = Palette {
    background: rgb(0.1, 0.1, 0.12),
    sidebar: rgb(0.14, 0.14, 0.16),
    panel: rgb(0.19, 0.19, 0.21),
    border: rgb(0.3, 0.3, 0.33),
    text: rgb(0.92, 0.91, 0.9),
    muted: rgb(0.65, 0.64, 0.62),
    faint: rgb(0.5, 0.5, 0.5),
    accent: rgb(0.36, 0.8, 0.71),
    success: rgb(0.35, 0.8, 0.45),
    warning: rgb(0.95, 0.7, 0.3),
    danger: rgb(0.95, 0.4, 0.4),
};

/// A single field change in the add or edit word form.
#[derive(Debug, Clone)]
pub enum DraftChange {
    Word(String),
    Date(String),
    Speaks(bool),
    Asl(bool),
    Confidence(u8),
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    Register,
    Logout,
    ChildNameChanged(String),
    AddChild,
    ChildSelected(String),
    PageSelected(Page),
    NewWord(DraftChange),
    AddWord,
    EditWord(usize),
    EditDraft(DraftChange),
    SaveEdit,
    CancelEdit,
    DeleteWord(usize),
    RequestDeleteChild,
    ConfirmDeleteChild,
    CancelDeleteChild,
    ExportCsv,
    CsvExported(Result<Option<PathBuf>, String>),
    ToggleTheme,
}

#[derive(Debug, Clone, PartialEq)]
enum Status {
    Info(String),
    Error(String),
}

/// Form contents for a word being added or edited.
#[derive(Debug, Clone, PartialEq)]
pub struct WordDraft {
    word: String,
    date: String,
    speaks: bool,
    asl: bool,
    confidence: u8,
}

impl WordDraft {
    fn blank() -> Self {
        WordDraft {
            word: String::new(),
            date: today().format(utils::DATE_FORMAT).to_string(),
            speaks: false,
            asl: false,
            confidence: DEFAULT_CONFIDENCE,
        }
    }

    fn from_entry(entry: &WordEntry) -> Self {
        WordDraft {
            word: entry.word.clone(),
            date: entry.added_on.format(utils::DATE_FORMAT).to_string(),
            speaks: entry.speaks(),
            asl: entry.asl(),
            confidence: entry.confidence.unwrap_or(DEFAULT_CONFIDENCE),
        }
    }

    fn apply(&mut self, change: DraftChange) {
        match change {
            DraftChange::Word(s) => self.word = s,
            DraftChange::Date(s) => self.date = s,
            DraftChange::Speaks(b) => self.speaks = b,
            DraftChange::Asl(b) => self.asl = b,
            DraftChange::Confidence(c) => self.confidence = c,
        }
    }

    fn to_entry(&self) -> Result<WordEntry, &'static str> {
        if self.word.trim().is_empty() {
            return Err("Please enter a word");
        }
        let date = utils::parse_form_date(&self.date).ok_or("Date must look like YYYY-MM-DD")?;
        Ok(WordEntry::dated(self.word.trim(), date)
            .with_modes(self.speaks, self.asl)
            .with_confidence(self.confidence))
    }
}

pub struct FirstWordsApp {
    data_file: PathBuf,
    store: VocabularyStore,

    // UI state
    user: Option<String>,
    name_input: String,
    child_input: String,
    selected_child: Option<String>,
    page: Page,
    new_word: WordDraft,
    editing: Option<(usize, WordDraft)>,
    confirm_delete_child: bool,
    status: Option<Status>,
    theme: Theme,
}

impl FirstWordsApp {
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let mut app = Self::with_data_file(config.data_file);
        if config.dark_mode {
            app.theme = Theme::Dark;
        }
        (app, Task::none())
    }

    pub fn with_data_file(data_file: PathBuf) -> Self {
        let store = storage::load(&data_file);
        FirstWordsApp {
            data_file,
            store,
            user: None,
            name_input: String::new(),
            child_input: String::new(),
            selected_child: None,
            page: Page::TrackWords,
            new_word: WordDraft::blank(),
            editing: None,
            confirm_delete_child: false,
            status: None,
            theme: Theme::Light,
        }
    }

    /// Run `op` on a copy of the store and persist it. The in-memory store is
    /// only replaced once the file has been written.
    fn apply<T>(
        &mut self,
        op: impl FnOnce(&mut VocabularyStore) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut next = self.store.clone();
        let out = op(&mut next)?;
        storage::save(&self.data_file, &next)?;
        self.store = next;
        Ok(out)
    }

    fn report(&mut self, err: StoreError) {
        if err.is_missing_reference() {
            warn!(error = %err, "action referenced missing data");
        } else {
            error!(error = %err, "action failed");
        }
        self.status = Some(Status::Error(err.to_string()));
    }

    fn current_words(&self) -> &[WordEntry] {
        match (&self.user, &self.selected_child) {
            (Some(user), Some(child)) => self.store.words(user, child).unwrap_or_default(),
            _ => &[],
        }
    }

    fn selection(&self) -> Option<(String, String)> {
        Some((self.user.clone()?, self.selected_child.clone()?))
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NameChanged(s) => {
                self.name_input = s;
            }
            Message::Register => {
                if self.name_input.trim().is_empty() {
                    self.status = Some(Status::Error("Please enter your name".to_string()));
                    return Task::none();
                }
                // Pick up anything written since startup.
                self.store = storage::load(&self.data_file);
                let name = self.name_input.clone();
                match self.apply(|store| store.register_user(&name)) {
                    Ok(user) => {
                        info!(user = %user, "signed in");
                        self.selected_child = self.store.children(&user).into_iter().next();
                        self.user = Some(user);
                        self.name_input.clear();
                        self.status = None;
                    }
                    Err(e) => self.report(e),
                }
            }
            Message::Logout => {
                self.user = None;
                self.selected_child = None;
                self.editing = None;
                self.confirm_delete_child = false;
                self.new_word = WordDraft::blank();
                self.status = None;
            }
            Message::ChildNameChanged(s) => {
                self.child_input = s;
            }
            Message::AddChild => {
                let Some(user) = self.user.clone() else { return Task::none() };
                let child = self.child_input.trim().to_string();
                if child.is_empty() {
                    self.status = Some(Status::Error("Please enter a name".to_string()));
                } else if self.store.words(&user, &child).is_some() {
                    self.status = Some(Status::Error("Child already exists".to_string()));
                } else {
                    match self.apply(|store| store.add_child(&user, &child)) {
                        Ok(_) => {
                            self.status = Some(Status::Info(format!("Added {}", child)));
                            self.selected_child = Some(child);
                            self.child_input.clear();
                            self.editing = None;
                        }
                        Err(e) => self.report(e),
                    }
                }
            }
            Message::ChildSelected(child) => {
                self.selected_child = Some(child);
                self.editing = None;
                self.confirm_delete_child = false;
                self.status = None;
            }
            Message::PageSelected(page) => {
                self.page = page;
            }
            Message::NewWord(change) => {
                self.new_word.apply(change);
            }
            Message::AddWord => {
                let Some((user, child)) = self.selection() else { return Task::none() };
                match self.new_word.to_entry() {
                    Err(msg) => self.status = Some(Status::Error(msg.to_string())),
                    Ok(entry) => {
                        let word = entry.word.clone();
                        match self.apply(|store| store.add_entry(&user, &child, entry)) {
                            Ok(()) => {
                                self.status = Some(Status::Info(format!(
                                    "Added '{}' to {}'s vocabulary!",
                                    word, child
                                )));
                                self.new_word = WordDraft::blank();
                            }
                            Err(e) => self.report(e),
                        }
                    }
                }
            }
            Message::EditWord(index) => {
                if let Some(entry) = self.current_words().get(index) {
                    self.editing = Some((index, WordDraft::from_entry(entry)));
                }
            }
            Message::EditDraft(change) => {
                if let Some((_, draft)) = &mut self.editing {
                    draft.apply(change);
                }
            }
            Message::SaveEdit => {
                let Some((user, child)) = self.selection() else { return Task::none() };
                let Some((index, draft)) = self.editing.clone() else { return Task::none() };
                match draft.to_entry() {
                    Err(msg) => self.status = Some(Status::Error(msg.to_string())),
                    Ok(entry) => {
                        let word = entry.word.clone();
                        match self.apply(|store| store.update_word(&user, &child, index, entry)) {
                            Ok(_) => {
                                self.status = Some(Status::Info(format!("Updated '{}'!", word)));
                                self.editing = None;
                            }
                            Err(e) => self.report(e),
                        }
                    }
                }
            }
            Message::CancelEdit => {
                self.editing = None;
            }
            Message::DeleteWord(index) => {
                let Some((user, child)) = self.selection() else { return Task::none() };
                match self.apply(|store| store.remove_word(&user, &child, index)) {
                    Ok(removed) => {
                        self.status = Some(Status::Info(format!("Deleted '{}'", removed.word)));
                        self.editing = None;
                    }
                    Err(e) => self.report(e),
                }
            }
            Message::RequestDeleteChild => {
                self.confirm_delete_child = true;
            }
            Message::CancelDeleteChild => {
                self.confirm_delete_child = false;
            }
            Message::ConfirmDeleteChild => {
                self.confirm_delete_child = false;
                let Some((user, child)) = self.selection() else { return Task::none() };
                match self.apply(|store| store.remove_child(&user, &child)) {
                    Ok(_) => {
                        self.status = Some(Status::Info(format!("Deleted {}'s profile", child)));
                        self.selected_child = self.store.children(&user).into_iter().next();
                        self.editing = None;
                    }
                    Err(e) => self.report(e),
                }
            }
            Message::ExportCsv => {
                let Some((_, child)) = self.selection() else { return Task::none() };
                let csv = utils::export_csv(self.current_words());
                let file_name = utils::csv_file_name(&child);
                return Task::perform(async move {
                    task::spawn_blocking(move || {
                        let Some(path) = FileDialog::new()
                            .set_directory(".")
                            .set_file_name(&file_name)
                            .add_filter("csv", &["csv"])
                            .save_file()
                        else {
                            return Ok(None);
                        };
                        std::fs::write(&path, csv)
                            .map(|_| Some(path))
                            .map_err(|e| format!("Export failed: {}", e))
                    })
                    .await
                    .unwrap_or_else(|e| Err(format!("Export failed: {}", e)))
                }, Message::CsvExported);
            }
            Message::CsvExported(Ok(Some(path))) => {
                info!(path = %path.display(), "exported vocabulary");
                self.status = Some(Status::Info(format!("Saved {}", path.display())));
            }
            Message::CsvExported(Ok(None)) => { /* cancelled */ }
            Message::CsvExported(Err(e)) => {
                error!(error = %e, "csv export failed");
                self.status = Some(Status::Error(e));
            }
            Message::ToggleTheme => {
                self.theme = match self.theme {
                    Theme::Light => Theme::Dark,
                    Theme::Dark => Theme::Light,
                };
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let sidebar = self.view_sidebar();

        let main_content = match (&self.user, &self.selected_child) {
            (None, _) => self.view_register(),
            (Some(_), None) => self.view_no_children(),
            (Some(_), Some(child)) => match self.page {
                Page::TrackWords => self.view_track_words(child),
                Page::PracticeWords => self.view_practice(),
            },
        };

        let layout = Row::new()
            .push(sidebar)
            .push(rule::Rule::vertical(1))
            .push(main_content);

        let bg_color = self.palette().background;
        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| {
                iced::widget::container::Style {
                    background: Some(iced::Background::Color(bg_color)),
                    border: Border::default(),
                    ..Default::default()
                }
            })
            .into()
    }

    fn view_sidebar(&self) -> Element<'_, Message> {
        let title = styled("First Words", 28, self.palette().accent);
        let subtitle = styled("Vocabulary Tracker", 14, self.palette().muted);

        let theme_btn = Button::new(
            Text::new(match self.theme {
                Theme::Light => "🌙 Dark Mode",
                Theme::Dark => "☀️ Light Mode",
            })
                .size(14)
        )
        .on_press(Message::ToggleTheme)
        .padding(10)
        .width(Length::Fill);

        let mut sidebar_content = Column::new()
            .padding(20)
            .spacing(20)
            .width(Length::Fixed(280.0))
            .push(title)
            .push(subtitle)
            .push(Space::with_height(10))
            .push(rule::Rule::horizontal(1));

        if let Some(user) = &self.user {
            let children = self.store.children(user);

            let logout_btn = Button::new(Text::new("Logout").size(14))
                .on_press(Message::Logout)
                .padding(10)
                .width(Length::Fill);

            let child_input = TextInput::new("Child's name", &self.child_input)
                .on_input(Message::ChildNameChanged)
                .on_submit(Message::AddChild)
                .padding(10);

            let add_child_btn = Button::new(Text::new("Add Child").size(14))
                .on_press(Message::AddChild)
                .padding(10)
                .width(Length::Fill);

            sidebar_content = sidebar_content
                .push(styled(format!("Logged in as: {}", user), 14, self.palette().text))
                .push(logout_btn)
                .push(rule::Rule::horizontal(1))
                .push(styled("Add New Child", 16, self.palette().text))
                .push(child_input)
                .push(add_child_btn);

            if !children.is_empty() {
                let child_picker = PickList::new(
                    children,
                    self.selected_child.clone(),
                    Message::ChildSelected,
                )
                .padding(10)
                .width(Length::Fill);

                let page_picker = PickList::new(
                    Page::all(),
                    Some(self.page),
                    Message::PageSelected,
                )
                .padding(10)
                .width(Length::Fill);

                sidebar_content = sidebar_content
                    .push(rule::Rule::horizontal(1))
                    .push(styled("Child", 16, self.palette().text))
                    .push(child_picker)
                    .push(styled("Navigate", 16, self.palette().text))
                    .push(page_picker);
            }
        }

        sidebar_content = sidebar_content
            .push(Space::with_height(20))
            .push(theme_btn);

        let sidebar_bg = self.palette().sidebar;
        Container::new(Scrollable::new(sidebar_content))
            .height(Length::Fill)
            .style(move |_theme| {
                iced::widget::container::Style {
                    background: Some(iced::Background::Color(sidebar_bg)),
                    border: Border::default(),
                    ..Default::default()
                }
            })
            .into()
    }

    fn view_register(&self) -> Element<'_, Message> {
        let title = styled("👶 First Words Tracker", 32, self.palette().text);
        let description = styled(
            "Welcome! Please register to get started",
            16,
            self.palette().muted,
        );

        let name_input = TextInput::new("Your Name", &self.name_input)
            .on_input(Message::NameChanged)
            .on_submit(Message::Register)
            .padding(15)
            .size(16)
            .width(Length::Fixed(400.0));

        let register_btn = Button::new(Text::new("Register").size(16))
            .on_press(Message::Register)
            .padding(15)
            .width(Length::Fixed(200.0));

        let content = Column::new()
            .padding(40)
            .spacing(30)
            .width(Length::Fill)
            .push(title)
            .push(description)
            .push(Space::with_height(20))
            .push(name_input)
            .push(register_btn)
            .push(self.status_line());

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    fn view_no_children(&self) -> Element<'_, Message> {
        let content = Column::new()
            .padding(40)
            .spacing(30)
            .width(Length::Fill)
            .align_x(Alignment::Center)
            .push(styled("👈 Add your first child using the sidebar to get started!", 18, self.palette().muted))
            .push(self.status_line());

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn view_track_words(&self, child: &str) -> Element<'_, Message> {
        let add_column = Column::new()
            .spacing(15)
            .width(Length::FillPortion(1))
            .push(styled(format!("Add Word for {}", child), 22, self.palette().text))
            .push(self.word_form(&self.new_word, Message::NewWord))
            .push(
                Button::new(Text::new("Add Word").size(16))
                    .on_press(Message::AddWord)
                    .padding(12)
                    .width(Length::Fixed(200.0)),
            );

        let words = self.current_words();
        let mut list_column = Column::new()
            .spacing(15)
            .width(Length::FillPortion(2))
            .push(styled(format!("{}'s Vocabulary", child), 22, self.palette().text));

        if words.is_empty() {
            list_column = list_column.push(styled(
                format!("No words yet! Start adding {}'s first words using the form on the left.", child),
                14,
                self.palette().faint,
            ));
        } else {
            let header = Row::new()
                .spacing(20)
                .align_y(Alignment::Center)
                .push(styled(format!("Total Words: {}", words.len()), 16, self.palette().text))
                .push(
                    Button::new(Text::new("Download CSV").size(14))
                        .on_press(Message::ExportCsv)
                        .padding(8),
                );

            let mut list = Column::new().spacing(8);
            // Newest first.
            for (index, entry) in words.iter().enumerate().rev() {
                match &self.editing {
                    Some((editing, draft)) if *editing == index => {
                        list = list.push(self.view_edit_word(draft));
                    }
                    _ => {
                        list = list.push(self.view_word_row(index, entry));
                    }
                }
                list = list.push(rule::Rule::horizontal(1));
            }

            list_column = list_column
                .push(header)
                .push(Scrollable::new(list).height(Length::Fill));
        }

        let columns = Row::new()
            .spacing(40)
            .height(Length::Fill)
            .push(add_column)
            .push(list_column);

        let content = Column::new()
            .padding(40)
            .spacing(20)
            .width(Length::Fill)
            .push(self.status_line())
            .push(columns)
            .push(rule::Rule::horizontal(1))
            .push(self.view_delete_child(child));

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn view_word_row(&self, index: usize, entry: &WordEntry) -> Element<'_, Message> {
        let summary = format!(
            "{} - {} ({}%)",
            entry.word,
            entry.modes_label(),
            entry.confidence.unwrap_or(0)
        );
        let details = Column::new()
            .spacing(4)
            .width(Length::Fill)
            .push(styled(summary, 16, self.palette().text))
            .push(styled(
                format!("Date first used: {}", entry.added_on.format(utils::DATE_FORMAT)),
                12,
                self.palette().faint,
            ));

        Row::new()
            .spacing(10)
            .align_y(Alignment::Center)
            .push(details)
            .push(
                Button::new(Text::new("Edit").size(14))
                    .on_press(Message::EditWord(index))
                    .padding(8),
            )
            .push(
                Button::new(Text::new("Delete").size(14))
                    .on_press(Message::DeleteWord(index))
                    .padding(8)
                    .style(iced::widget::button::danger),
            )
            .into()
    }

    fn view_edit_word<'a>(&'a self, draft: &'a WordDraft) -> Element<'a, Message> {
        let container_bg = self.palette().panel;
        let border_color = self.palette().border;

        let buttons = Row::new()
            .spacing(10)
            .push(
                Button::new(Text::new("Save Changes").size(14))
                    .on_press(Message::SaveEdit)
                    .padding(8),
            )
            .push(
                Button::new(Text::new("Cancel").size(14))
                    .on_press(Message::CancelEdit)
                    .padding(8),
            );

        let form = Column::new()
            .spacing(10)
            .push(self.word_form(draft, Message::EditDraft))
            .push(buttons);

        Container::new(form)
            .padding(15)
            .width(Length::Fill)
            .style(move |_theme| {
                iced::widget::container::Style {
                    background: Some(iced::Background::Color(container_bg)),
                    border: Border {
                        color: border_color,
                        width: 1.0,
                        radius: 4.0.into(),
                    },
                    ..Default::default()
                }
            })
            .into()
    }

    /// Fields shared by the add and edit forms; `wrap` routes changes to the right draft.
    fn word_form<'a>(
        &'a self,
        draft: &'a WordDraft,
        wrap: fn(DraftChange) -> Message,
    ) -> Element<'a, Message> {
        let word_input = TextInput::new("New Word", &draft.word)
            .on_input(move |s| wrap(DraftChange::Word(s)))
            .padding(10);

        let date_input = TextInput::new("YYYY-MM-DD", &draft.date)
            .on_input(move |s| wrap(DraftChange::Date(s)))
            .padding(10);

        let speaks = Checkbox::new("Speaks", draft.speaks)
            .on_toggle(move |b| wrap(DraftChange::Speaks(b)));
        let asl = Checkbox::new("ASL (Sign Language)", draft.asl)
            .on_toggle(move |b| wrap(DraftChange::Asl(b)));

        let confidence = Slider::new(0..=MAX_CONFIDENCE, draft.confidence, move |c| {
            wrap(DraftChange::Confidence(c))
        })
        .step(5u8);

        Column::new()
            .spacing(10)
            .push(word_input)
            .push(styled("Date first used", 12, self.palette().muted))
            .push(date_input)
            .push(styled("How does the child know this word?", 14, self.palette().text))
            .push(speaks)
            .push(asl)
            .push(styled(
                format!("Confidence: {}%", draft.confidence),
                14,
                self.palette().text,
            ))
            .push(confidence)
            .into()
    }

    fn view_delete_child(&self, child: &str) -> Element<'_, Message> {
        if !self.confirm_delete_child {
            return Button::new(Text::new(format!("⚠️ Delete {}", child)).size(14))
                .on_press(Message::RequestDeleteChild)
                .padding(10)
                .into();
        }

        Row::new()
            .spacing(15)
            .align_y(Alignment::Center)
            .push(styled(
                format!("This will permanently delete {}'s profile and all their words.", child),
                14,
                self.palette().danger,
            ))
            .push(
                Button::new(Text::new(format!("Delete {}", child)).size(14))
                    .on_press(Message::ConfirmDeleteChild)
                    .padding(10)
                    .style(iced::widget::button::danger),
            )
            .push(
                Button::new(Text::new("Cancel").size(14))
                    .on_press(Message::CancelDeleteChild)
                    .padding(10),
            )
            .into()
    }

    fn view_practice(&self) -> Element<'_, Message> {
        let suggestions = practice::practice_words(self.current_words());

        let mut list = Column::new().spacing(15);
        for (n, p) in suggestions.iter().enumerate() {
            let (badge, badge_color) = if p.in_vocabulary {
                ("✓ Known", self.palette().success)
            } else {
                ("New", self.palette().warning)
            };
            let status = if p.in_vocabulary {
                format!("Status: In vocabulary (Confidence: {}%)", p.confidence)
            } else {
                "Status: Not yet learned".to_string()
            };
            let age = match p.typical_age {
                Some(months) => format!("Typical age: {} months", months),
                None => "Typical age: unknown".to_string(),
            };

            let details = Column::new()
                .spacing(5)
                .width(Length::Fill)
                .push(styled(format!("{}. {}", n + 1, p.word.to_uppercase()), 22, self.palette().text))
                .push(styled(status, 14, self.palette().muted))
                .push(styled(age, 14, self.palette().muted))
                .push(styled(format!("💡 Learning strategy: {}", p.strategy), 14, self.palette().accent));

            list = list
                .push(
                    Row::new()
                        .spacing(20)
                        .push(details)
                        .push(styled(badge, 16, badge_color)),
                )
                .push(rule::Rule::horizontal(1));
        }

        let content = Column::new()
            .padding(40)
            .spacing(20)
            .width(Length::Fill)
            .push(styled("Practice Words", 32, self.palette().text))
            .push(styled(
                "Focus on these 5 words to help your child build their vocabulary!",
                16,
                self.palette().muted,
            ))
            .push(Scrollable::new(list).height(Length::Fill));

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn status_line(&self) -> Element<'_, Message> {
        match &self.status {
            Some(Status::Info(msg)) => styled(msg.clone(), 14, self.palette().success).into(),
            Some(Status::Error(msg)) => styled(msg.clone(), 14, self.palette().danger).into(),
            None => Space::with_height(0).into(),
        }
    }

    fn palette(&self) -> Palette {
        self.theme.palette()
    }
}

fn styled<'a>(content: impl Into<String>, size: u16, color: Color) -> Text<'a> {
    Text::new(content.into())
        .size(size)
        .style(move |_theme| {
            iced::widget::text::Style {
                color: Some(color),
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn app_in(dir: &Path) -> FirstWordsApp {
        FirstWordsApp::with_data_file(dir.join("data.json"))
    }

    fn sign_in(app: &mut FirstWordsApp, name: &str) {
        let _ = app.update(Message::NameChanged(name.to_string()));
        let _ = app.update(Message::Register);
    }

    fn add_child(app: &mut FirstWordsApp, name: &str) {
        let _ = app.update(Message::ChildNameChanged(name.to_string()));
        let _ = app.update(Message::AddChild);
    }

    fn add_word(app: &mut FirstWordsApp, word: &str) {
        let _ = app.update(Message::NewWord(DraftChange::Word(word.to_string())));
        let _ = app.update(Message::AddWord);
    }

    #[test]
    fn register_requires_a_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        sign_in(&mut app, "  ");
        assert!(app.user.is_none());
        assert_eq!(app.status, Some(Status::Error("Please enter your name".into())));
    }

    #[test]
    fn register_add_child_and_word_persist() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        sign_in(&mut app, "Alice");
        add_child(&mut app, "Sam");
        assert_eq!(app.selected_child.as_deref(), Some("Sam"));

        let _ = app.update(Message::NewWord(DraftChange::Speaks(true)));
        let _ = app.update(Message::NewWord(DraftChange::Confidence(30)));
        add_word(&mut app, "mama");

        let on_disk = storage::load(&dir.path().join("data.json"));
        assert_eq!(on_disk, app.store);
        let words = on_disk.words("Alice", "Sam").unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].word, "mama");
        assert_eq!(words[0].speaks, Some(true));
        assert_eq!(words[0].asl, Some(false));
        assert_eq!(words[0].confidence, Some(30));
        assert_eq!(words[0].added_on, today());
        // Form resets after a successful add.
        assert_eq!(app.new_word, WordDraft::blank());
    }

    #[test]
    fn duplicate_child_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        sign_in(&mut app, "Alice");
        add_child(&mut app, "Sam");
        add_child(&mut app, "Sam");
        assert_eq!(app.status, Some(Status::Error("Child already exists".into())));
    }

    #[test]
    fn invalid_date_is_rejected_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        sign_in(&mut app, "Alice");
        add_child(&mut app, "Sam");
        let _ = app.update(Message::NewWord(DraftChange::Date("yesterday".into())));
        add_word(&mut app, "ball");

        assert!(matches!(app.status, Some(Status::Error(_))));
        assert!(app.current_words().is_empty());
    }

    #[test]
    fn edit_and_delete_word() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        sign_in(&mut app, "Alice");
        add_child(&mut app, "Sam");
        add_word(&mut app, "mama");
        add_word(&mut app, "bal");

        let _ = app.update(Message::EditWord(1));
        let _ = app.update(Message::EditDraft(DraftChange::Word("ball".into())));
        let _ = app.update(Message::EditDraft(DraftChange::Date("2024-05-01".into())));
        let _ = app.update(Message::SaveEdit);
        assert!(app.editing.is_none());
        assert_eq!(app.current_words()[1].word, "ball");

        let _ = app.update(Message::DeleteWord(0));
        let on_disk = storage::load(&dir.path().join("data.json"));
        let words = on_disk.words("Alice", "Sam").unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].word, "ball");
        assert_eq!(words[0].added_on.to_string(), "2024-05-01");
    }

    #[test]
    fn delete_child_needs_confirmation() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        sign_in(&mut app, "Alice");
        add_child(&mut app, "Mia");
        add_child(&mut app, "Sam");
        add_word(&mut app, "mama");

        let _ = app.update(Message::RequestDeleteChild);
        let _ = app.update(Message::CancelDeleteChild);
        assert!(app.store.words("Alice", "Sam").is_some());

        let _ = app.update(Message::RequestDeleteChild);
        let _ = app.update(Message::ConfirmDeleteChild);
        let on_disk = storage::load(&dir.path().join("data.json"));
        assert!(on_disk.words("Alice", "Sam").is_none());
        assert_eq!(app.selected_child.as_deref(), Some("Mia"));
    }

    #[test]
    fn failed_save_keeps_memory_and_disk_in_step() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = FirstWordsApp::with_data_file(dir.path().join("missing").join("data.json"));
        sign_in(&mut app, "Alice");

        assert!(app.user.is_none());
        assert!(app.store.is_empty());
        assert!(matches!(app.status, Some(Status::Error(_))));
    }

    #[test]
    fn returning_user_sees_existing_children() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut app = app_in(dir.path());
            sign_in(&mut app, "Alice");
            add_child(&mut app, "Sam");
            add_word(&mut app, "dog");
        }
        let mut app = app_in(dir.path());
        sign_in(&mut app, "Alice");
        assert_eq!(app.selected_child.as_deref(), Some("Sam"));
        assert_eq!(app.current_words()[0].word, "dog");
    }

    #[test]
    fn logout_clears_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        sign_in(&mut app, "Alice");
        add_child(&mut app, "Sam");
        let _ = app.update(Message::Logout);
        assert!(app.user.is_none());
        assert!(app.selected_child.is_none());
        assert!(app.current_words().is_empty());
    }

    #[test]
    fn theme_toggle_switches_palette() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        assert_eq!(app.palette(), LIGHT);
        let _ = app.update(Message::ToggleTheme);
        assert_eq!(app.palette(), DARK);
        assert_ne!(LIGHT.text, DARK.text);
    }
}

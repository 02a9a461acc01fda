//! Localized label catalog for the authoring shell
//!
//! The core never renders text. Every user-visible string lives here in
//! English and Russian, selected by the configured [`Language`].

use feint_types::Language;

/// One language's worth of UI strings.
pub struct UiStrings {
    pub banner: &'static str,
    pub bye: &'static str,

    // Authoring feedback
    pub scenario_added: &'static str,
    pub scenario_removed: &'static str,
    pub delay_updated: &'static str,
    pub list_empty: &'static str,
    pub col_title: &'static str,
    pub col_icon: &'static str,
    pub col_buttons: &'static str,
    pub col_delay: &'static str,

    // Run feedback
    pub run_empty: &'static str,
    pub run_finished: &'static str,
    pub run_interrupted: &'static str,
    pub run_failed: &'static str,
    pub stage_restored: &'static str,

    // Rejections
    pub locked: &'static str,
    pub bad_position: &'static str,
    pub empty_title: &'static str,
    pub empty_message: &'static str,
    pub unknown_icon: &'static str,
    pub unknown_buttons: &'static str,
    pub unknown_language: &'static str,
    pub save_failed: &'static str,

    // Preferences
    pub hide_on: &'static str,
    pub hide_off: &'static str,
    pub sound_on: &'static str,
    pub sound_off: &'static str,
    pub sound_selected: &'static str,
    pub sound_disabled: &'static str,
    pub volume_set: &'static str,
    pub language_switched: &'static str,

    // Config display
    pub cfg_header: &'static str,
    pub cfg_language: &'static str,
    pub cfg_hide: &'static str,
    pub cfg_sound: &'static str,
    pub cfg_sound_file: &'static str,
    pub cfg_volume: &'static str,
    pub cfg_none: &'static str,
    pub on: &'static str,
    pub off: &'static str,

    // Dialog prompts
    pub prompt_ok: &'static str,
    pub prompt_ok_cancel: &'static str,
    pub prompt_yes_no: &'static str,
    pub invalid_response: &'static str,
    pub input_closed: &'static str,
}

pub static ENGLISH: UiStrings = UiStrings {
    banner: "feint — staged error dialog workshop. Type 'help' for commands.",
    bye: "quitting...",

    scenario_added: "Scenario added at position",
    scenario_removed: "Scenario removed:",
    delay_updated: "Delay updated",
    list_empty: "No scenarios yet",
    col_title: "Title",
    col_icon: "Icon",
    col_buttons: "Buttons",
    col_delay: "Delay",

    run_empty: "Nothing to run: the scenario list is empty",
    run_finished: "Scenarios finished",
    run_interrupted: "Run interrupted",
    run_failed: "Run failed",
    stage_restored: "— back to the workshop —",

    locked: "Rejected: a playback run is in progress",
    bad_position: "No scenario at that position",
    empty_title: "The title must not be empty",
    empty_message: "The message must not be empty",
    unknown_icon: "Unknown icon (use info, warning or error)",
    unknown_buttons: "Unknown button set (use ok, ok-cancel or yes-no)",
    unknown_language: "Unknown language (use english or russian)",
    save_failed: "Could not save settings",

    hide_on: "The window will be hidden while scenarios run",
    hide_off: "The window stays visible during runs",
    sound_on: "Custom sound enabled",
    sound_off: "Custom sound disabled",
    sound_selected: "Sound selected:",
    sound_disabled: "Enable custom sound first (use-sound on)",
    volume_set: "Volume set to",
    language_switched: "Language switched to English",

    cfg_header: "Current settings",
    cfg_language: "language",
    cfg_hide: "hide window during runs",
    cfg_sound: "custom sound",
    cfg_sound_file: "sound file",
    cfg_volume: "volume",
    cfg_none: "(none)",
    on: "on",
    off: "off",

    prompt_ok: "[Enter] OK >",
    prompt_ok_cancel: "[o] OK  [c] Cancel >",
    prompt_yes_no: "[y] Yes  [n] No >",
    invalid_response: "Please answer with one of the offered buttons",
    input_closed: "input stream closed",
};

pub static RUSSIAN: UiStrings = UiStrings {
    banner: "feint — мастерская сценариев ошибок. Введите 'help' для списка команд.",
    bye: "выход...",

    scenario_added: "Сценарий добавлен на позицию",
    scenario_removed: "Сценарий удалён:",
    delay_updated: "Задержка обновлена",
    list_empty: "Сценариев пока нет",
    col_title: "Заголовок",
    col_icon: "Значок",
    col_buttons: "Кнопки",
    col_delay: "Задержка",

    run_empty: "Запускать нечего: список сценариев пуст",
    run_finished: "Сценарии завершены",
    run_interrupted: "Запуск прерван",
    run_failed: "Запуск не удался",
    stage_restored: "— возвращаемся в мастерскую —",

    locked: "Отклонено: сценарии сейчас выполняются",
    bad_position: "Нет сценария с такой позицией",
    empty_title: "Заголовок не может быть пустым",
    empty_message: "Сообщение не может быть пустым",
    unknown_icon: "Неизвестный значок (info, warning или error)",
    unknown_buttons: "Неизвестный набор кнопок (ok, ok-cancel или yes-no)",
    unknown_language: "Неизвестный язык (english или russian)",
    save_failed: "Не удалось сохранить настройки",

    hide_on: "Окно будет скрыто на время сценариев",
    hide_off: "Окно останется видимым во время запуска",
    sound_on: "Пользовательский звук включён",
    sound_off: "Пользовательский звук выключен",
    sound_selected: "Звук выбран:",
    sound_disabled: "Сначала включите пользовательский звук (use-sound on)",
    volume_set: "Громкость установлена:",
    language_switched: "Язык переключён на русский",

    cfg_header: "Текущие настройки",
    cfg_language: "язык",
    cfg_hide: "скрывать окно при запуске",
    cfg_sound: "пользовательский звук",
    cfg_sound_file: "файл звука",
    cfg_volume: "громкость",
    cfg_none: "(не выбран)",
    on: "вкл",
    off: "выкл",

    prompt_ok: "[Enter] ОК >",
    prompt_ok_cancel: "[o] ОК  [c] Отмена >",
    prompt_yes_no: "[y] Да  [n] Нет >",
    invalid_response: "Ответьте одной из предложенных кнопок",
    input_closed: "входной поток закрыт",
};

/// Catalog for the given language.
pub fn for_language(language: Language) -> &'static UiStrings {
    match language {
        Language::English => &ENGLISH,
        Language::Russian => &RUSSIAN,
    }
}

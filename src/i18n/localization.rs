use std::collections::HashMap;

use super::Language;

/// Interface string table with a current language selection.
///
/// Missing keys resolve to the key itself, so a lookup never fails.
#[derive(Debug, Clone)]
pub struct Localization {
    current: Language,
    tables: HashMap<Language, HashMap<&'static str, &'static str>>,
}

impl Localization {
    pub fn new(language: Language) -> Self {
        let tables = Language::ALL
            .into_iter()
            .map(|lang| (lang, table_for(lang).iter().copied().collect()))
            .collect();

        Self {
            current: language,
            tables,
        }
    }

    /// Text for `key` in the current language, or `key` when unmapped
    pub fn get_text<'a>(&'a self, key: &'a str) -> &'a str {
        self.tables
            .get(&self.current)
            .and_then(|table| table.get(key).copied())
            .unwrap_or(key)
    }

    pub fn set_language(&mut self, language: Language) {
        self.current = language;
    }

    pub fn language(&self) -> Language {
        self.current
    }
}

impl Default for Localization {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

fn table_for(language: Language) -> &'static [(&'static str, &'static str)] {
    match language {
        Language::Russian => RUSSIAN,
        Language::English => ENGLISH,
        Language::Korean => KOREAN,
    }
}

static RUSSIAN: &[(&str, &str)] = &[
    ("title", "Clever Snake"),
    ("classic_mode", "Классическая змейка"),
    ("quiz_mode", "Викторина"),
    ("word_mode", "Змейка со словами"),
    ("play", "Играть"),
    ("settings", "Настройки"),
    ("exit", "Выход"),
    ("score", "Счет"),
    ("pause", "Пауза"),
    ("resume", "Продолжить"),
    ("game_over", "Игра окончена"),
    ("final_score", "Финальный счет"),
    ("restart", "Перезапустить"),
    ("back_to_menu", "В главное меню"),
    ("language", "Язык"),
    ("interface_lang", "Язык интерфейса"),
    ("game_lang", "Язык игры"),
    ("resolution", "Разрешение экрана"),
    ("question", "Вопрос"),
    ("answer", "Ответ"),
    ("correct", "Правильно!"),
    ("wrong", "Неправильно!"),
    ("collect_word", "Соберите слово"),
    ("word", "Слово"),
    ("controls", "Управление"),
    ("up", "Вверх - W"),
    ("down", "Вниз - S"),
    ("left", "Влево - A"),
    ("right", "Вправо - D"),
    ("pause_key", "Пауза - C"),
    ("resume_key", "Продолжить - V"),
    ("quit_key", "Выход - Q"),
    ("well_done", "Молодец!"),
    ("all_answered", "Ты ответил на все вопросы и прошел игру!"),
    ("back_hint", "ESC - Назад в меню"),
    ("best_score", "Рекорд"),
    ("time", "Время"),
    ("too_small", "Окно терминала слишком маленькое"),
    ("resize_hint", "Увеличьте окно или выберите меньшее разрешение"),
];

static ENGLISH: &[(&str, &str)] = &[
    ("title", "Clever Snake"),
    ("classic_mode", "Classic Snake"),
    ("quiz_mode", "Quiz"),
    ("word_mode", "Snake with Words"),
    ("play", "Play"),
    ("settings", "Settings"),
    ("exit", "Exit"),
    ("score", "Score"),
    ("pause", "Pause"),
    ("resume", "Resume"),
    ("game_over", "Game Over"),
    ("final_score", "Final Score"),
    ("restart", "Restart"),
    ("back_to_menu", "Back to Menu"),
    ("language", "Language"),
    ("interface_lang", "Interface Language"),
    ("game_lang", "Game Language"),
    ("resolution", "Screen Resolution"),
    ("question", "Question"),
    ("answer", "Answer"),
    ("correct", "Correct!"),
    ("wrong", "Wrong!"),
    ("collect_word", "Collect the word"),
    ("word", "Word"),
    ("controls", "Controls"),
    ("up", "Up - W"),
    ("down", "Down - S"),
    ("left", "Left - A"),
    ("right", "Right - D"),
    ("pause_key", "Pause - C"),
    ("resume_key", "Resume - V"),
    ("quit_key", "Quit - Q"),
    ("well_done", "Well done!"),
    ("all_answered", "You answered every question and beat the game!"),
    ("back_hint", "ESC - Back to menu"),
    ("best_score", "Best"),
    ("time", "Time"),
    ("too_small", "Terminal window too small"),
    ("resize_hint", "Enlarge the window or pick a smaller resolution"),
];

static KOREAN: &[(&str, &str)] = &[
    ("title", "클리버 스네이크"),
    ("classic_mode", "클래식 뱀"),
    ("quiz_mode", "퀴즈"),
    ("word_mode", "단어 뱀"),
    ("play", "플레이"),
    ("settings", "설정"),
    ("exit", "종료"),
    ("score", "점수"),
    ("pause", "일시정지"),
    ("resume", "계속"),
    ("game_over", "게임 오버"),
    ("final_score", "최종 점수"),
    ("restart", "다시 시작"),
    ("back_to_menu", "메뉴로 돌아가기"),
    ("language", "언어"),
    ("interface_lang", "인터페이스 언어"),
    ("game_lang", "게임 언어"),
    ("resolution", "화면 해상도"),
    ("question", "문제"),
    ("answer", "답"),
    ("correct", "정답!"),
    ("wrong", "오답!"),
    ("collect_word", "단어를 모으세요"),
    ("word", "단어"),
    ("controls", "조작법"),
    ("up", "위 - W"),
    ("down", "아래 - S"),
    ("left", "왼쪽 - A"),
    ("right", "오른쪽 - D"),
    ("pause_key", "일시정지 - C"),
    ("resume_key", "계속 - V"),
    ("quit_key", "종료 - Q"),
    ("well_done", "잘했어요!"),
    ("all_answered", "모든 문제에 답하고 게임을 완료했어요!"),
    ("back_hint", "ESC - 메뉴로 돌아가기"),
    ("best_score", "최고 점수"),
    ("time", "시간"),
    ("too_small", "터미널 창이 너무 작습니다"),
    ("resize_hint", "창을 키우거나 더 낮은 해상도를 선택하세요"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_text_current_language() {
        let mut loc = Localization::new(Language::English);
        assert_eq!(loc.get_text("score"), "Score");

        loc.set_language(Language::Russian);
        assert_eq!(loc.get_text("score"), "Счет");

        loc.set_language(Language::Korean);
        assert_eq!(loc.get_text("score"), "점수");
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        let loc = Localization::new(Language::Korean);
        assert_eq!(loc.get_text("no_such_key"), "no_such_key");
    }

    #[test]
    fn test_tables_share_keys() {
        let keys: Vec<&str> = ENGLISH.iter().map(|(k, _)| *k).collect();
        for table in [RUSSIAN, KOREAN] {
            let other: Vec<&str> = table.iter().map(|(k, _)| *k).collect();
            assert_eq!(keys, other);
        }
    }
}

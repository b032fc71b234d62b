//! Quiz question bank, one table per content language.
//!
//! Every language carries the same thirty-two questions in the same order:
//! ten about South Korea, ten about England and twelve about Russia.

use crate::i18n::Language;

/// A single multiple-choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub correct: &'static str,
    pub wrong: &'static [&'static str],
}

impl QuizQuestion {
    /// Number of answers shown for this question (correct plus wrong)
    pub fn answer_count(&self) -> usize {
        self.wrong.len() + 1
    }

    /// Correct answer first, followed by the wrong answers in table order
    pub fn answers(&self) -> Vec<&'static str> {
        let mut answers = Vec::with_capacity(self.answer_count());
        answers.push(self.correct);
        answers.extend_from_slice(self.wrong);
        answers
    }
}

/// Returns the question table for a content language
pub fn questions(language: Language) -> &'static [QuizQuestion] {
    match language {
        Language::Russian => RUSSIAN,
        Language::English => ENGLISH,
        Language::Korean => KOREAN,
    }
}

const fn q(
    question: &'static str,
    correct: &'static str,
    wrong: &'static [&'static str],
) -> QuizQuestion {
    QuizQuestion {
        question,
        correct,
        wrong,
    }
}

static RUSSIAN: &[QuizQuestion] = &[
    q(
        "Как называется главный флаг Южной Кореи?",
        "Тхэгыкки",
        &["Восходящее Солнце", "Четыре Дракона", "Звезда и Полумесяц"],
    ),
    q(
        "Какой цветок является национальным символом Кореи?",
        "Мугунхва (Гибискус)",
        &["Сакура (Вишня)", "Лотос", "Роза"],
    ),
    q(
        "Какое животное считается священным в корейских мифах?",
        "Дракон/Тигр",
        &["Единорог", "Змея", "Феникс"],
    ),
    q(
        "Как называется традиционная корейская одежда?",
        "Ханбок",
        &["Кимоно", "Кипао", "Сари"],
    ),
    q(
        "Какой большой азиатский праздник отмечается осенью в честь сбора урожая?",
        "Чхусок",
        &["Соллаль", "Дивали", "Тет"],
    ),
    q(
        "Как называется традиционное корейское боевое искусство?",
        "Тхэквондо",
        &["Каратэ", "Кунг-фу", "Айкидо"],
    ),
    q(
        "Как называется корейский алфавит?",
        "Хангыль",
        &["Кандзи", "Кириллица", "Иероглифы"],
    ),
    q(
        "Какое самое известное острое блюдо из ферментированной капусты?",
        "Кимчи",
        &["Рамен", "Суши", "Пульгоги"],
    ),
    q(
        "Как называется популярное корейское блюдо из риса, мяса, овощей и острого соуса?",
        "Бибимбап",
        &["Кимбап", "Чапчхэ", "Ттокпокки"],
    ),
    q(
        "Как называют корейские сериалы?",
        "Дорамы",
        &["Аниме", "Теленовеллы", "Ситкомы"],
    ),
    q(
        "Как называется знаменитый дворец в Лондоне, где живет король?",
        "Букингемский дворец",
        &["Версаль", "Тауэр", "Виндзорский замок"],
    ),
    q(
        "Как называется самая известная достопримечательность Лондона — большая башня с часами?",
        "Биг-Бен (Башня Елизаветы)",
        &["Эмпайр-стейт-билдинг", "Вестминстер", "Пизанская башня"],
    ),
    q(
        "Какое животное является национальным символом Англии?",
        "Лев",
        &["Орел", "Бык", "Барсук"],
    ),
    q(
        "Как называется красный автобус с двумя этажами, который можно увидеть в Лондоне?",
        "Даблдекер",
        &["Трамвай", "Метро", "Минивэн"],
    ),
    q(
        "Какое самое известное блюдо из жареной рыбы и картошки?",
        "Фиш энд чипс",
        &["Пицца", "Гамбургер", "Плов"],
    ),
    q(
        "Как называется традиционный английский напиток, который англичане пьют с молоком?",
        "Чай",
        &["Кофе", "Сок", "Лимонад"],
    ),
    q(
        "Как называется древнее сооружение из камней, расположенное на равнине?",
        "Стоунхендж",
        &["Пирамиды", "Колизей", "Мачу-Пикчу"],
    ),
    q(
        "Какой сказочный король собрал вокруг себя рыцарей Круглого стола?",
        "Король Артур",
        &["Король Ричард", "Король Лир", "Король Генрих"],
    ),
    q(
        "Какой вид спорта очень популярен в Англии?",
        "Футбол",
        &["Баскетбол", "Бейсбол", "Крикет"],
    ),
    q(
        "Какую фразу говорят, чтобы пожелать кому-то удачи перед представлением?",
        "Break a leg!",
        &["Good luck!", "Nice to meet you!", "See you later!"],
    ),
    q(
        "Какое животное является одним из самых известных национальных символов России?",
        "Медведь",
        &["Волк", "Лиса", "Олень"],
    ),
    q(
        "Какой самый большой город и столица России?",
        "Москва",
        &["Санкт-Петербург", "Киев", "Казань"],
    ),
    q(
        "Как называется самая длинная река в Европе, которая протекает через Россию?",
        "Волга",
        &["Дон", "Нева", "Обь"],
    ),
    q(
        "Как называется всемирно известный архитектурный комплекс в Москве, окруженный стенами?",
        "Кремль",
        &["Эрмитаж", "Зимний Дворец", "Большой театр"],
    ),
    q(
        "Как называются расписные деревянные куклы, вложенные одна в другую?",
        "Матрешка",
        &["Неваляшка", "Буратино", "Дымковская игрушка"],
    ),
    q(
        "Какой вид транспорта на тройке лошадей был популярен для зимних путешествий?",
        "Тройка (Санки)",
        &["Карета", "Плот", "Дирижабль"],
    ),
    q(
        "Как называется традиционный русский суп из капусты и мяса?",
        "Щи",
        &["Борщ", "Рассольник", "Уха"],
    ),
    q(
        "Как называются тонкие, круглые лепешки, которые часто едят со сметаной, вареньем или икрой?",
        "Блины",
        &["Оладьи", "Пышки", "Лаваш"],
    ),
    q(
        "Как называется холодный летний суп, который готовят на квасе?",
        "Окрошка",
        &["Гаспачо", "Свекольник", "Холодник"],
    ),
    q(
        "Какой сказочный персонаж умеет летать в ступе и живет в избушке на курьих ножках?",
        "Баба-Яга",
        &["Кощей Бессмертный", "Змей Горыныч", "Леший"],
    ),
    q(
        "Как зовут девушку, которая помогает Деду Морозу и всегда одета в голубое или белое?",
        "Снегурочка",
        &["Аленушка", "Василиса", "Снежная Королева"],
    ),
    q(
        "Какой музыкальный инструмент, похожий на треугольник, является символом русской народной музыки?",
        "Балалайка",
        &["Гусли", "Гармонь", "Домра"],
    ),
];

static ENGLISH: &[QuizQuestion] = &[
    q(
        "What is the name of South Korea's main flag?",
        "Taegukgi",
        &["Rising Sun", "Four Dragons", "Star and Crescent"],
    ),
    q(
        "What flower is the national symbol of Korea?",
        "Mugunghwa (Rose of Sharon)",
        &["Cherry Blossom (Sakura)", "Lotus", "Rose"],
    ),
    q(
        "Which animal is considered sacred or symbolic in Korean myths?",
        "Dragon/Tiger",
        &["Unicorn", "Snake", "Phoenix"],
    ),
    q(
        "What is the name of the traditional Korean clothing with bright colors and full skirts?",
        "Hanbok",
        &["Kimono", "Qipao", "Sari"],
    ),
    q(
        "What major Asian holiday is celebrated in the autumn to give thanks for the harvest?",
        "Chuseok",
        &["Seollal", "Diwali", "Tet"],
    ),
    q(
        "What is the name of the traditional Korean martial art that involves a lot of kicking?",
        "Taekwondo",
        &["Karate", "Kung Fu", "Aikido"],
    ),
    q(
        "What is the Korean alphabet called that looks like circles, squares, and sticks?",
        "Hangeul",
        &["Kanji", "Cyrillic", "Hieroglyphs"],
    ),
    q(
        "What is the most famous spicy dish made of fermented cabbage, eaten with almost every meal?",
        "Kimchi",
        &["Ramen", "Sushi", "Bulgogi"],
    ),
    q(
        "What is the popular Korean dish of rice, meat, vegetables, and spicy sauce served in a bowl?",
        "Bibimbap",
        &["Gimbap", "Japchae", "Tteokbokki"],
    ),
    q(
        "What are Korean TV series called?",
        "Dramas",
        &["Anime", "Telenovelas", "Sitcoms"],
    ),
    q(
        "What is the name of the famous palace in London where the King lives?",
        "Buckingham Palace",
        &["Versailles", "The Tower", "Windsor Castle"],
    ),
    q(
        "What is the most famous landmark in London — the large clock tower?",
        "Big Ben (Elizabeth Tower)",
        &["Empire State Building", "Westminster", "Leaning Tower of Pisa"],
    ),
    q(
        "Which animal is the national symbol of England, often shown on coats of arms?",
        "Lion",
        &["Eagle", "Bull", "Badger"],
    ),
    q(
        "What is the name of the red, two-story bus seen in London?",
        "Double-decker",
        &["Tram", "Subway", "Minivan"],
    ),
    q(
        "What is the most famous dish of deep-fried fish and potatoes, traditionally wrapped in newspaper?",
        "Fish and Chips",
        &["Pizza", "Hamburger", "Pilaf"],
    ),
    q(
        "What is the traditional English drink that people often drink with milk?",
        "Tea",
        &["Coffee", "Juice", "Lemonade"],
    ),
    q(
        "What is the name of the ancient stone structure located on a plain with many legends about it?",
        "Stonehenge",
        &["The Pyramids", "The Colosseum", "Machu Picchu"],
    ),
    q(
        "What legendary king, according to legends, gathered knights of the Round Table around him?",
        "King Arthur",
        &["King Richard", "King Lear", "King Henry"],
    ),
    q(
        "What sport, played with feet and a ball, is very popular in England?",
        "Football",
        &["Basketball", "Baseball", "Cricket"],
    ),
    q(
        "What phrase is said to wish someone good luck before a performance?",
        "Break a leg!",
        &["Good luck!", "Nice to meet you!", "See you later!"],
    ),
    q(
        "Which animal is one of the most famous national symbols of Russia?",
        "Bear",
        &["Wolf", "Fox", "Deer"],
    ),
    q(
        "What is the largest city and capital of Russia?",
        "Moscow",
        &["St. Petersburg", "Kyiv", "Kazan"],
    ),
    q(
        "What is the longest river in Europe that flows through Russia?",
        "Volga",
        &["Don", "Neva", "Ob"],
    ),
    q(
        "What is the world-famous architectural complex in Moscow, surrounded by walls?",
        "The Kremlin",
        &["The Hermitage", "The Winter Palace", "The Bolshoi Theatre"],
    ),
    q(
        "What are the painted wooden dolls, nested one inside the other, called?",
        "Matryoshka",
        &["Tumbler doll", "Pinocchio", "Dymkovo toy"],
    ),
    q(
        "What is the three-horse sled that was popular for winter travel called?",
        "Troika (Sled)",
        &["Carriage", "Raft", "Airship"],
    ),
    q(
        "What is the traditional Russian soup made of cabbage and meat?",
        "Shchi",
        &["Borsch", "Rassolnik", "Ukha"],
    ),
    q(
        "What are the thin, round pancakes often eaten with sour cream, jam, or caviar called?",
        "Blini",
        &["Oladyi", "Pyshki", "Lavash"],
    ),
    q(
        "What is the cold summer soup made with kvass called?",
        "Okroshka",
        &["Gazpacho", "Svekólnik", "Kholodnik"],
    ),
    q(
        "What fairy tale character can fly in a mortar and lives in a hut on chicken legs?",
        "Baba Yaga",
        &["Koschei the Deathless", "Zmey Gorynych", "Leshy"],
    ),
    q(
        "What is the name of the girl who helps Ded Moroz and is always dressed in blue or white?",
        "Snegurochka",
        &["Alyonushka", "Vasilisa", "The Snow Queen"],
    ),
    q(
        "What musical instrument, shaped like a triangle, is a symbol of Russian folk music?",
        "Balalaika",
        &["Gusli", "Garmon", "Domra"],
    ),
];

static KOREAN: &[QuizQuestion] = &[
    q(
        "대한민국의 국기 이름은 무엇인가요?",
        "태극기",
        &["떠오르는 태양", "네 마리의 용", "별과 초승달"],
    ),
    q(
        "한국의 나라를 상징하는 꽃은 무엇인가요?",
        "무궁화",
        &["벚꽃", "연꽃", "장미"],
    ),
    q(
        "한국 신화에서 신성하거나 상징적인 동물은 무엇인가요?",
        "용/호랑이",
        &["유니콘", "뱀", "불사조"],
    ),
    q(
        "화려한 색상과 풍성한 치마가 있는 전통 한국 옷은 무엇이라고 부르나요?",
        "한복",
        &["기모노", "치파오", "사리"],
    ),
    q(
        "가을에 수확에 감사하며 기념하는 큰 명절은 무엇인가요?",
        "추석",
        &["설날", "디왈리", "뗏"],
    ),
    q(
        "발차기 동작이 많은 전통 한국 무술은 무엇인가요?",
        "태권도",
        &["가라데", "쿵푸", "아이키도"],
    ),
    q(
        "동그라미, 네모, 선 모양으로 이루어진 한국의 글자는 무엇인가요?",
        "한글",
        &["한자", "키릴 문자", "상형 문자"],
    ),
    q(
        "거의 모든 식사에 곁들여 먹는 발효된 양배추로 만든 가장 유명하고 매운 음식은 무엇인가요?",
        "김치",
        &["라면", "초밥", "불고기"],
    ),
    q(
        "밥, 고기, 채소, 매운 소스를 그릇에 담아 비벼 먹는 인기 있는 한국 음식은 무엇인가요?",
        "비빔밥",
        &["김밥", "잡채", "떡볶이"],
    ),
    q(
        "한국 TV 드라마 시리즈는 무엇이라고 부르나요?",
        "드라마",
        &["애니메이션", "텔레노벨라", "시트콤"],
    ),
    q(
        "런던에 있는 왕이 사는 유명한 궁궐의 이름은 무엇인가요?",
        "버킹엄 궁전",
        &["베르사유", "타워", "윈저 성"],
    ),
    q(
        "런던에서 가장 유명한 랜드마크인 큰 시계탑은 무엇이라고 부르나요?",
        "빅 벤",
        &["엠파이어 스테이트 빌딩", "웨스트민스터", "피사의 사탑"],
    ),
    q(
        "문장에 자주 등장하는, 영국을 상징하는 동물은 무엇인가요?",
        "사자",
        &["독수리", "황소", "오소리"],
    ),
    q(
        "런던에서 볼 수 있는 두 층짜리 빨간 버스는 무엇이라고 부르나요?",
        "이층 버스/더블데커",
        &["전차", "지하철", "미니밴"],
    ),
    q(
        "튀긴 생선과 감자로 만든, 전통적으로 신문에 싸서 먹던 가장 유명한 음식은 무엇인가요?",
        "피시 앤 칩스",
        &["피자", "햄버거", "필라프"],
    ),
    q(
        "영국 사람들이 우유와 함께 마시는 전통 음료는 무엇인가요?",
        "차",
        &["커피", "주스", "레모네이드"],
    ),
    q(
        "평원에 위치하며 많은 전설이 전해지는, 돌로 만들어진 고대 구조물은 무엇인가요?",
        "스톤헨지",
        &["피라미드", "콜로세움", "마추픽추"],
    ),
    q(
        "전설에 따르면 원탁의 기사들을 모았다고 하는 전설적인 왕은 누구인가요?",
        "아더 왕",
        &["리처드 왕", "리어 왕", "헨리 왕"],
    ),
    q(
        "발을 사용하여 공을 차는 스포츠로, 영국에서 매우 인기 있는 종목은 무엇인가요?",
        "축구",
        &["농구", "야구", "크리켓"],
    ),
    q(
        "공연 전에 누군가에게 행운을 빌어줄 때 하는 말은 무엇인가요?",
        "Break a leg!",
        &["Good luck!", "Nice to meet you!", "See you later!"],
    ),
    q(
        "러시아의 가장 유명한 국가 상징 중 하나이며 동화에 자주 등장하는 동물은 무엇인가요?",
        "곰",
        &["늑대", "여우", "사슴"],
    ),
    q(
        "러시아의 가장 큰 도시이자 수도는 어디인가요?",
        "모스크바",
        &["상트페테르부르크", "키이우", "카잔"],
    ),
    q(
        "유럽을 가로질러 흐르는 가장 긴 강은 무엇인가요?",
        "볼가 강",
        &["돈 강", "네바 강", "오브 강"],
    ),
    q(
        "벽으로 둘러싸여 있으며 궁전과 성당이 있는 모스크바의 세계적으로 유명한 건축 단지는 무엇인가요?",
        "크렘린",
        &["에르미타주", "겨울 궁전", "볼쇼이 극장"],
    ),
    q(
        "가장 큰 것부터 가장 작은 것까지, 하나 안에 다른 인형들이 들어 있는 칠해진 나무 인형은 무엇이라고 부르나요?",
        "마트료시카",
        &["오뚝이 인형", "피노키오", "딤코보 장난감"],
    ),
    q(
        "세 마리 말이 끄는 썰매는 겨울철 여행에 인기 있는 운송 수단이었습니다. 이것을 무엇이라고 부르나요?",
        "트로이카/썰매",
        &["마차", "뗏목", "비행선"],
    ),
    q(
        "양배추와 고기로 만든 전통 러시아 수프는 무엇인가요?",
        "시",
        &["보르시", "라솔니크", "우하"],
    ),
    q(
        "사워 크림, 잼 또는 캐비어와 함께 자주 먹는 얇고 둥근 팬케이크는 무엇이라고 부르나요?",
        "블리니",
        &["올라디", "푸시키", "라바시"],
    ),
    q(
        "크바스(발효 음료)로 만드는 차가운 여름 수프는 무엇인가요?",
        "오크로시카",
        &["가스파초", "스베콜니크", "홀로드니크"],
    ),
    q(
        "절구통을 타고 날아다니고 닭다리 위에 지어진 오두막에 사는 동화 속 캐릭터는 누구인가요?",
        "바바 야가",
        &["코셰이", "즈메이 고리니치", "레시"],
    ),
    q(
        "데드 모로즈(Ded Moroz, 러시아판 산타클로스)를 돕고 항상 파란색이나 흰색 옷을 입는 소녀의 이름은 무엇인가요?",
        "스네구로치카",
        &["알료누시카", "바실리사", "눈의 여왕"],
    ),
    q(
        "삼각형처럼 생겼으며 러시아 민속 음악의 상징인 악기는 무엇인가요?",
        "발랄라이카",
        &["구슬리", "가르몬", "돔라"],
    ),
];

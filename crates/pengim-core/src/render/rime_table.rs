//! Fifteen-initial rime-table notation (十五音).
//!
//! A syllable is written as its initial-class character, its rime-class
//! character and its tone-category label, inside 【】.

use crate::terminal::Initial;

/// Characters that count as a written initial. Anything else at the start
/// of an assembled syllable means the syllable has the null initial 英.
pub const RECOGNIZED_INITIALS: [char; 15] = [
    '柳', '邊', '求', '去', '地', '頗', '他', '貞', '入', '時', '英', '文', '語', '出', '喜',
];

const NULL_INITIAL: char = '英';

/// Initial-class character. Initials merged in the traditional table keep
/// their letter in parentheses.
pub fn initial_character(initial: Initial) -> &'static str {
    match initial {
        Initial::L => "柳",
        Initial::N => "柳(n)",
        Initial::B => "邊",
        Initial::M => "邊(m)",
        Initial::G => "求",
        Initial::Ng => "求(ng)",
        Initial::K => "去",
        Initial::D => "地",
        Initial::P => "頗",
        Initial::T => "他",
        Initial::Z => "貞",
        Initial::R => "入",
        Initial::S => "時",
        Initial::Bh => "文",
        Initial::Gh => "語",
        Initial::C => "出",
        Initial::H => "喜",
    }
}

/// Rime-class character for a Dieghv-spelled final (medial, nasal `n`,
/// coda). Several finals share a class.
pub fn rime_character(fin: &str) -> Option<&'static str> {
    Some(match fin {
        "ung" | "uk" => "君",
        "ieng" | "iek" => "堅",
        "im" | "ip" => "金",
        "ui" | "uih" => "歸",
        "ong" | "ok" => "公",
        "uai" | "uaih" => "乖",
        "uain" => "乖（鼻）",
        "eng" | "ek" => "經",
        "ueng" | "uek" => "關",
        "ou" | "ouh" => "孤",
        "iau" | "iou" | "ieu" | "iauh" | "iouh" | "ieuh" => "驕",
        "oi" | "oih" => "雞",
        "iong" | "iok" => "恭",
        "o" | "oh" => "高",
        "ai" | "aih" => "皆",
        "ing" | "ik" => "斤",
        "ion" | "ionh" | "ien" | "ienh" => "薑",
        "am" | "ap" => "甘",
        "ua" | "uah" => "柯",
        "ang" | "ak" => "江",
        "iam" | "iap" | "iem" | "iep" => "兼",
        "au" | "auh" => "交",
        "e" | "eh" => "家",
        "ue" | "ueh" => "瓜",
        "a" | "ah" => "膠",
        "u" | "uh" => "龜",
        "vng" | "ng" | "vk" => "扛",
        "i" | "ih" => "枝",
        "iu" | "iuh" => "鳩",
        "uan" | "uanh" => "官",
        "v" | "vh" => "車",
        "an" | "anh" => "柑",
        "en" | "enh" => "更",
        "ia" | "iah" => "京",
        "ian" | "ianh" => "京（鼻）",
        "io" | "ioh" | "ie" | "ieh" => "蕉",
        "iang" | "iak" => "姜",
        "in" | "inh" => "天",
        "uang" | "uak" => "光",
        "oin" | "oinh" => "間",
        _ => return None,
    })
}

/// Tone-category label for a citation tone. The neutral tone has none.
pub fn tone_label(citation: u8) -> &'static str {
    match citation {
        1 => "上平",
        2 => "上上",
        3 => "上去",
        4 => "上入",
        5 => "下平",
        6 => "下上",
        7 => "下去",
        8 => "下入",
        _ => "",
    }
}

/// Bracket an assembled syllable, writing 英 when it does not start with
/// an initial-class character.
pub(super) fn bracket(assembled: &str) -> String {
    let has_initial = assembled
        .chars()
        .next()
        .is_some_and(|c| RECOGNIZED_INITIALS.contains(&c));

    let mut out = String::with_capacity(assembled.len() + 9);
    out.push('【');
    if !has_initial {
        out.push(NULL_INITIAL);
    }
    out.push_str(assembled);
    out.push('】');
    out
}

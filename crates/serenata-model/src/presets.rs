//! Built-in songs. Each preset carries the full configuration a run needs:
//! lyrics, per-line delays, color policy, source URL, and the metadata
//! fallbacks used when the page cannot be fetched.

use crate::color::{Color, ColorPolicy};
use crate::delay::DelayTable;
use crate::song::Song;

/// IDs of all built-in songs, in presentation order.
pub fn builtin_ids() -> &'static [&'static str] {
    &["anh-vui", "nhu-anh-da-thay-em"]
}

/// Look up a built-in song by ID.
pub fn builtin(id: &str) -> Option<Song> {
    match id {
        "anh-vui" => Some(anh_vui()),
        "nhu-anh-da-thay-em" => Some(nhu_anh_da_thay_em()),
        _ => None,
    }
}

/// "Anh Vui": keyword-colored, positive phrases blue, negative red.
pub fn anh_vui() -> Song {
    Song {
        title: "Cảm ơn vì em ngỏ lời mời".to_string(),
        artist: "Phạm Kỳ".to_string(),
        url: "https://zingmp3.vn/album/ANH-VUI-Single-Pham-Ky/6BDIEE7A.html".to_string(),
        lines: vec![
            "Anh vui".to_string(),
            "sao nước mắt cứ tuôn trào".to_string(),
            "Chẳng phải như thế quá tốt hay sao".to_string(),
            "Anh ta đáng giá nhường nào".to_string(),
            "Ngược lại nhìn anh trông chẳng ra sao".to_string(),
            "Cũng đúng thôi".to_string(),
            "Anh làm gì xứng đáng với em...".to_string(),
        ],
        delays: DelayTable::from_pairs(&[
            (0, 1200),
            (1, 1300),
            (2, 3750),
            (3, 1900),
            (4, 3500),
            (5, 2600),
            (6, 5000),
        ]),
        color_policy: ColorPolicy::Keyword {
            positive: vec![
                "cảm ơn".to_string(),
                "hạnh phúc".to_string(),
                "vui".to_string(),
                "tự hào".to_string(),
                "xinh".to_string(),
            ],
            negative: vec![
                "nước mắt".to_string(),
                "nghẹn ngào".to_string(),
                "chẳng ra sao".to_string(),
                "làm gì xứng đáng".to_string(),
            ],
        },
    }
}

/// "Như Anh Đã Thấy Em": lines cycle green / red / white.
pub fn nhu_anh_da_thay_em() -> Song {
    Song {
        title: "Như Anh Đã Thấy Em".to_string(),
        artist: "PhúcXP, Freak D".to_string(),
        url: "https://zingmp3.vn/album/Nhu-Anh-Da-Thay-Em-Single-PhucXP-Freak-D/6B6E88W9.html"
            .to_string(),
        lines: vec![
            "Và một lần cuối".to_string(),
            "Để mình không cần mạnh mẽ".to_string(),
            "Dù sao ta cũng đã yêu nhiều thế !".to_string(),
            "Có rất nhiều điều".to_string(),
            "Mà anh vẫn chưa nói ra...".to_string(),
            "Vì lần cuối cùng được nắm tay em bước qua khắp nẻo đường".to_string(),
            "Ngắm hoàng hôn chạm bờ vai em".to_string(),
            "Như khoảnh khắc đầu tiên em đến".to_string(),
            "Anh cất nụ cười người vào trang kỉ niệm".to_string(),
            "Như em vẫn còn bên anh...".to_string(),
        ],
        delays: DelayTable::from_pairs(&[
            (0, 1200),
            (1, 1300),
            (2, 3750),
            (3, 1900),
            (4, 3000),
            (5, 2600),
            (6, 5000),
            (7, 3500),
            (8, 4000),
            (9, 3000),
        ]),
        color_policy: ColorPolicy::Cycle {
            palette: vec![Color::Green, Color::Red, Color::White],
        },
    }
}

//! The curated built-in tables.
//!
//! Stroke counts follow the Kangxi (traditional-form) convention used in
//! name numerology: 杨 counts as 楊 (13), 锦 as 錦 (16), and so on.

use crate::dictionary::Dictionary;
use crate::element::Element;
use crate::gender::{Gender, GenderAffinity};
use crate::source::LiterarySource;
use crate::style::{Style, StyleSet};

// ---------------------------------------------------------------------------
// Element pools
// ---------------------------------------------------------------------------

const WOOD: &str = "林森楠彬桐柏松杰荣芷若兰芸茜梓栋乔东启凯欣琪雅萱语娟强";
const FIRE: &str = "炎煜晖明昊晓灿彤丹南耀旭昕阳烁熙晴丽哲骏翰娜婷致德志";
const EARTH: &str = "坤城培基堂坚垚宇安岩峰岳嘉辰均圣佑伟硕磊怡轩媛嫣远厚";
const METAL: &str = "锦铭钧鑫锐钰铮诚瑞书思新胜承舒钊锋钦珊静晨睿悦诗然姝齐川刚";
const WATER: &str = "泽涵浩清源海洋雨霖润沐淼冰雪凌渊鸿文汐漪博妍泉华水雄豪武";

// ---------------------------------------------------------------------------
// Strokes and tones: (char, Kangxi strokes, tone)
// ---------------------------------------------------------------------------

const GLYPHS: &[(char, u32, u8)] = &[
    // Wood
    ('林', 8, 2), ('森', 12, 1), ('楠', 13, 2), ('彬', 11, 1), ('桐', 10, 2),
    ('柏', 9, 3), ('松', 8, 1), ('杰', 12, 2), ('荣', 14, 2), ('芷', 10, 3),
    ('若', 11, 4), ('兰', 23, 2), ('芸', 10, 2), ('茜', 12, 4), ('梓', 11, 3),
    ('栋', 12, 4), ('乔', 12, 2), ('东', 8, 1), ('启', 11, 3), ('凯', 12, 3),
    ('欣', 8, 1), ('琪', 13, 2), ('雅', 12, 3), ('萱', 15, 1), ('语', 14, 3),
    ('娟', 10, 1), ('强', 11, 2),
    // Fire
    ('炎', 8, 2), ('煜', 13, 4), ('晖', 13, 1), ('明', 8, 2), ('昊', 8, 4),
    ('晓', 16, 3), ('灿', 17, 4), ('彤', 7, 2), ('丹', 4, 1), ('南', 9, 2),
    ('耀', 20, 4), ('旭', 6, 4), ('昕', 8, 1), ('阳', 17, 2), ('烁', 19, 4),
    ('熙', 13, 1), ('晴', 12, 2), ('丽', 19, 4), ('哲', 10, 2), ('骏', 17, 4),
    ('翰', 16, 4), ('娜', 10, 4), ('婷', 12, 2), ('致', 10, 4), ('德', 15, 2),
    ('志', 7, 4),
    // Earth
    ('坤', 8, 1), ('城', 10, 2), ('培', 11, 2), ('基', 11, 1), ('堂', 11, 2),
    ('坚', 11, 1), ('垚', 9, 2), ('宇', 6, 3), ('安', 6, 1), ('岩', 8, 2),
    ('峰', 10, 1), ('岳', 8, 4), ('嘉', 14, 1), ('辰', 7, 2), ('均', 7, 1),
    ('圣', 13, 4), ('佑', 7, 4), ('伟', 11, 3), ('硕', 14, 4), ('磊', 15, 3),
    ('怡', 9, 2), ('轩', 10, 1), ('媛', 12, 2), ('嫣', 14, 1), ('远', 17, 3),
    ('厚', 9, 4),
    // Metal
    ('锦', 16, 3), ('铭', 14, 2), ('钧', 12, 1), ('鑫', 24, 1), ('锐', 15, 4),
    ('钰', 13, 4), ('铮', 16, 1), ('诚', 14, 2), ('瑞', 14, 4), ('书', 10, 1),
    ('思', 9, 1), ('新', 13, 1), ('胜', 12, 4), ('承', 8, 2), ('舒', 12, 1),
    ('钊', 10, 1), ('锋', 15, 1), ('钦', 12, 1), ('珊', 10, 1), ('静', 16, 4),
    ('晨', 11, 2), ('睿', 14, 4), ('悦', 11, 4), ('诗', 13, 1), ('然', 12, 2),
    ('姝', 9, 1), ('齐', 14, 2), ('川', 3, 1), ('刚', 10, 1),
    // Water
    ('泽', 17, 2), ('涵', 12, 2), ('浩', 11, 4), ('清', 12, 1), ('源', 14, 2),
    ('海', 11, 3), ('洋', 10, 2), ('雨', 8, 3), ('霖', 16, 2), ('润', 16, 4),
    ('沐', 8, 4), ('淼', 12, 3), ('冰', 6, 1), ('雪', 11, 3), ('凌', 10, 2),
    ('渊', 12, 1), ('鸿', 17, 2), ('文', 4, 2), ('汐', 7, 1), ('漪', 15, 1),
    ('博', 12, 2), ('妍', 9, 2), ('泉', 9, 2), ('华', 14, 2), ('水', 4, 3),
    ('雄', 12, 2), ('豪', 14, 2), ('武', 8, 3),
    // Outside the pools
    ('彪', 11, 1), ('威', 9, 1), ('梅', 11, 2), ('珍', 10, 1), ('香', 9, 1),
    ('统', 12, 3), ('剑', 15, 4), ('子', 3, 3), ('紫', 11, 3), ('来', 8, 2),
    ('寿', 14, 4), ('兽', 19, 4), ('晶', 12, 1), ('经', 13, 1), ('生', 5, 1),
    ('八', 2, 1),
    // Surnames
    ('杨', 13, 2), ('王', 4, 2), ('李', 7, 3), ('张', 11, 1), ('刘', 15, 2),
    ('陈', 16, 2), ('吴', 7, 2), ('史', 5, 3), ('范', 15, 4), ('杜', 7, 4),
    ('胡', 11, 2), ('秦', 10, 2), ('沈', 8, 3), ('朱', 6, 1), ('魏', 18, 4),
    ('黄', 12, 2), ('赵', 14, 4), ('周', 8, 1), ('徐', 10, 2), ('孙', 10, 1),
    ('马', 10, 3), ('郭', 15, 1), ('何', 7, 2), ('高', 10, 1), ('罗', 20, 2),
    ('郑', 19, 4),
];

// ---------------------------------------------------------------------------
// Policy lists
// ---------------------------------------------------------------------------

const BANNED: &str = "死病鬼凶杀贱穷亡哭灾毒丑奸魔屎尸";
const MALE_ONLY: &str = "杰峰磊锋栋雄刚强豪彪武钊骏";
const FEMALE_ONLY: &str = "娜婷娟妍媛嫣珊茜芸芷丽漪汐姝";

/// Surname → characters that turn the full name into an unfortunate pun.
const HOMOPHONES: &[(char, &str)] = &[
    ('杨', "伟威梅"), // 阳痿, 杨梅
    ('吴', "德"),     // 无德
    ('史', "珍香"),   // 屎真香
    ('范', "统剑"),   // 饭桶, 犯贱
    ('杜', "子紫"),   // 肚子
    ('胡', "来丽"),   // 胡来, 狐狸
    ('秦', "寿兽"),   // 禽兽
    ('沈', "晶经"),   // 神经
    ('魏', "生"),     // 卫生
    ('王', "八"),     // 王八
];

// ---------------------------------------------------------------------------
// Meanings
// ---------------------------------------------------------------------------

const MEANINGS: &[(char, &str)] = &[
    ('林', "树木成林，生机蓬勃"),
    ('森', "林木繁盛，气象森然"),
    ('楠', "楠木坚实，栋梁之材"),
    ('彬', "文质彬彬，温文尔雅"),
    ('桐', "梧桐引凤，高洁清雅"),
    ('柏', "松柏长青，坚贞不屈"),
    ('松', "苍松挺拔，傲霜斗雪"),
    ('杰', "才智出众，人中豪杰"),
    ('荣', "草木繁茂，荣耀显达"),
    ('若', "顺应自然，谦和从容"),
    ('梓', "梓木良材，乡梓情深"),
    ('启', "开启智慧，启迪未来"),
    ('欣', "欣然喜悦，积极乐观"),
    ('雅', "高雅脱俗，端庄大方"),
    ('萱', "忘忧之草，无忧无虑"),
    ('明', "光明磊落，聪慧明理"),
    ('昊', "天空广阔，胸怀博大"),
    ('晓', "破晓之光，通达明白"),
    ('旭', "旭日东升，朝气蓬勃"),
    ('熙', "光明和乐，兴盛安康"),
    ('晴', "晴空万里，心境开朗"),
    ('哲', "睿智明达，善于思考"),
    ('翰', "翰墨书香，文采斐然"),
    ('德', "品行高尚，厚德载物"),
    ('志', "志向远大，意志坚定"),
    ('坤', "大地厚重，包容万物"),
    ('城', "城池坚固，守护安宁"),
    ('培', "培育栽培，厚积薄发"),
    ('宇', "器宇轩昂，胸怀宇宙"),
    ('安', "平安喜乐，安定从容"),
    ('峰', "高峰险峻，勇攀高峰"),
    ('岳', "山岳巍峨，稳重可靠"),
    ('嘉', "美好嘉许，德行出众"),
    ('辰', "星辰日月，光耀时代"),
    ('佑', "福佑庇护，吉人天相"),
    ('磊', "光明磊落，胸怀坦荡"),
    ('怡', "心旷神怡，和悦愉快"),
    ('轩', "气宇轩昂，高远开阔"),
    ('远', "志存高远，前程远大"),
    ('锦', "锦绣前程，华美绚丽"),
    ('铭', "铭记于心，刻骨不忘"),
    ('钧', "千钧之力，举足轻重"),
    ('鑫', "财富兴盛，多金多福"),
    ('诚', "诚实守信，真诚待人"),
    ('瑞', "吉祥瑞气，福运亨通"),
    ('书', "饱读诗书，知书达理"),
    ('思', "深思熟虑，才思敏捷"),
    ('承', "承前启后，担当有为"),
    ('舒', "舒展从容，心境安适"),
    ('静', "宁静致远，沉稳淡泊"),
    ('晨', "清晨朝阳，充满希望"),
    ('睿', "睿智通达，目光深远"),
    ('悦', "喜悦欢愉，和乐美满"),
    ('诗', "诗情画意，才华横溢"),
    ('泽', "恩泽广被，润泽万物"),
    ('涵', "涵养深厚，包容大度"),
    ('浩', "浩然正气，广阔无边"),
    ('清', "清澈纯净，清正廉明"),
    ('源', "源远流长，根基深厚"),
    ('海', "海纳百川，有容乃大"),
    ('雨', "春雨润物，滋养万方"),
    ('霖', "甘霖普降，恩泽于人"),
    ('润', "温润如玉，滋润丰泽"),
    ('沐', "沐浴恩泽，洁净清新"),
    ('雪', "冰雪聪明，纯洁无瑕"),
    ('渊', "学识渊博，深沉稳重"),
    ('鸿', "鸿鹄之志，志向高远"),
    ('文', "文采斐然，温文尔雅"),
    ('博', "博学多才，见识广博"),
    ('华', "才华出众，风华正茂"),
];

// ---------------------------------------------------------------------------
// Modern pools and style keywords
// ---------------------------------------------------------------------------

const MODERN_MALE: &str = "宇轩睿浩哲昊铭泽辰骏杰豪博凯翰诚";
const MODERN_FEMALE: &str = "欣怡涵琪悦雅晴彤萱诗婷妍梓若安语";

const STYLE_KEYWORDS: &[(Style, Gender, &str)] = &[
    (Style::Classical, Gender::Male, "承书文瑞嘉翰"),
    (Style::Poetic, Gender::Male, "泽霖远清松晨"),
    (Style::Grand, Gender::Male, "宇浩鸿昊峰岳"),
    (Style::Fresh, Gender::Male, "林沐晨明旭阳"),
    (Style::Gentle, Gender::Male, "安润怡诚思舒"),
    (Style::Classical, Gender::Female, "书兰芷诗静姝"),
    (Style::Poetic, Gender::Female, "若汐雪漪语萱"),
    (Style::Grand, Gender::Female, "嘉瑞锦熙晖楠"),
    (Style::Fresh, Gender::Female, "晴雨沐芸茜琪"),
    (Style::Gentle, Gender::Female, "怡安涵悦欣雅"),
];

// ---------------------------------------------------------------------------
// Literary sources
// ---------------------------------------------------------------------------

const fn source(
    text: &'static str,
    attribution: &'static str,
    keywords: [char; 2],
    gender: GenderAffinity,
    styles: StyleSet,
) -> LiterarySource {
    LiterarySource {
        text,
        attribution,
        keywords,
        gender,
        styles,
    }
}

const SOURCES: &[LiterarySource] = &[
    source(
        "明月松间照，清泉石上流。",
        "王维《山居秋暝》",
        ['清', '泉'],
        GenderAffinity::Mixed,
        StyleSet::POETIC.union(StyleSet::FRESH),
    ),
    source(
        "非淡泊无以明志，非宁静无以致远。",
        "诸葛亮《诫子书》",
        ['致', '远'],
        GenderAffinity::Male,
        StyleSet::CLASSICAL.union(StyleSet::GRAND),
    ),
    source(
        "粗缯大布裹生涯，腹有诗书气自华。",
        "苏轼《和董传留别》",
        ['书', '华'],
        GenderAffinity::Mixed,
        StyleSet::CLASSICAL.union(StyleSet::GENTLE),
    ),
    source(
        "上善若水，水善利万物而不争。",
        "老子《道德经》",
        ['若', '水'],
        GenderAffinity::Mixed,
        StyleSet::POETIC.union(StyleSet::GENTLE),
    ),
    source(
        "静女其姝，俟我于城隅。",
        "《诗经·邶风·静女》",
        ['静', '姝'],
        GenderAffinity::Female,
        StyleSet::CLASSICAL.union(StyleSet::GENTLE),
    ),
    source(
        "见贤思齐焉，见不贤而内自省也。",
        "《论语·里仁》",
        ['思', '齐'],
        GenderAffinity::Mixed,
        StyleSet::CLASSICAL,
    ),
    source(
        "地势坤，君子以厚德载物。",
        "《周易·坤》",
        ['厚', '德'],
        GenderAffinity::Male,
        StyleSet::CLASSICAL.union(StyleSet::GRAND),
    ),
    source(
        "燕雀安知鸿鹄之志哉！",
        "司马迁《史记·陈涉世家》",
        ['鸿', '志'],
        GenderAffinity::Male,
        StyleSet::GRAND,
    ),
    source(
        "晴川历历汉阳树，芳草萋萋鹦鹉洲。",
        "崔颢《黄鹤楼》",
        ['晴', '川'],
        GenderAffinity::Mixed,
        StyleSet::FRESH.union(StyleSet::POETIC),
    ),
    source(
        "沅有芷兮澧有兰，思公子兮未敢言。",
        "屈原《九歌·湘夫人》",
        ['芷', '兰'],
        GenderAffinity::Female,
        StyleSet::CLASSICAL.union(StyleSet::POETIC),
    ),
    source(
        "黍稷非馨，明德惟馨。",
        "《尚书·君陈》",
        ['明', '德'],
        GenderAffinity::Male,
        StyleSet::CLASSICAL.union(StyleSet::GRAND),
    ),
    source(
        "博学而笃志，切问而近思。",
        "《论语·子张》",
        ['博', '思'],
        GenderAffinity::Male,
        StyleSet::CLASSICAL,
    ),
    source(
        "木欣欣以向荣，泉涓涓而始流。",
        "陶渊明《归去来兮辞》",
        ['欣', '荣'],
        GenderAffinity::Mixed,
        StyleSet::FRESH,
    ),
    source(
        "黄发垂髫，并怡然自乐。",
        "陶渊明《桃花源记》",
        ['怡', '然'],
        GenderAffinity::Female,
        StyleSet::GENTLE,
    ),
    source(
        "落其实者思其树，饮其流者怀其源。",
        "庾信《徵调曲》",
        ['思', '源'],
        GenderAffinity::Mixed,
        StyleSet::GENTLE.union(StyleSet::CLASSICAL),
    ),
    source(
        "锦瑟无端五十弦，一弦一柱思华年。",
        "李商隐《锦瑟》",
        ['锦', '华'],
        GenderAffinity::Mixed,
        StyleSet::POETIC.union(StyleSet::GRAND),
    ),
    source(
        "水光潋滟晴方好，山色空蒙雨亦奇。",
        "苏轼《饮湖上初晴后雨》",
        ['雨', '晴'],
        GenderAffinity::Female,
        StyleSet::FRESH.union(StyleSet::POETIC),
    ),
    source(
        "海上生明月，天涯共此时。",
        "张九龄《望月怀远》",
        ['明', '海'],
        GenderAffinity::Mixed,
        StyleSet::GRAND.union(StyleSet::POETIC),
    ),
];

impl Dictionary {
    /// The curated built-in dictionary.
    #[must_use]
    pub fn builtin() -> Self {
        let mut builder = Self::builder()
            .element_pool(Element::Wood, WOOD)
            .element_pool(Element::Fire, FIRE)
            .element_pool(Element::Earth, EARTH)
            .element_pool(Element::Metal, METAL)
            .element_pool(Element::Water, WATER)
            .glyphs(GLYPHS)
            .meanings(MEANINGS)
            .banned(BANNED)
            .male_only(MALE_ONLY)
            .female_only(FEMALE_ONLY)
            .modern_pool(Gender::Male, MODERN_MALE)
            .modern_pool(Gender::Female, MODERN_FEMALE);

        for &(surname, forbidden) in HOMOPHONES {
            builder = builder.homophones(surname, forbidden);
        }
        for &(style, gender, chars) in STYLE_KEYWORDS {
            builder = builder.style_keywords(style, gender, chars);
        }
        for src in SOURCES {
            builder = builder.source(src.clone());
        }
        builder.build()
    }
}

/// Surnames with a known stroke count in the built-in tables.
#[must_use]
pub const fn builtin_surnames() -> &'static [char] {
    &[
        '杨', '王', '李', '张', '刘', '陈', '吴', '史', '范', '杜', '胡', '秦', '沈',
        '朱', '魏', '黄', '赵', '周', '徐', '孙', '马', '郭', '何', '高', '罗', '郑',
        '林',
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

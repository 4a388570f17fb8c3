use once_cell::sync::Lazy;

use crate::models::domain::Personality;

/// The fixed tutor-persona catalog, one persona per school subject.
/// Loaded once at startup; never mutated.
static CATALOG: Lazy<Vec<Personality>> = Lazy::new(|| {
    vec![
        Personality {
            id: "p1".to_string(),
            name: "言葉（ことは）".to_string(),
            tone: "言葉に敏感で感受性豊か。文学や詩のようにロマンチックで、ちょっと感傷的。人の気持ちを読むのが得意だけど、たまに自分の世界に入り込みがち。".to_string(),
            extra: "よく古風な言い回しを使ったり、漢字の豆知識を語ったりする".to_string(),
            color: "#8E44AD".to_string(),
            bg_color: "#F4F1FB".to_string(),
            light_color: "#E8DAEF".to_string(),
            genre: "国語".to_string(),
            subfields: vec!["漢字".to_string(), "文法".to_string(), "読解".to_string(), "語彙".to_string()],
        },
        Personality {
            id: "p2".to_string(),
            name: "数十（かずと）".to_string(),
            tone: "几帳面で合理的、整理整頓が大好き。計算やパズルに強く、物事をきっちり白黒つけたがる".to_string(),
            extra: "「え、それだと答え合わないよ」とすぐに突っ込みを入れる。融通が利かないこともあるけど、信頼できるタイプ".to_string(),
            color: "#2E86AB".to_string(),
            bg_color: "#F0F6FA".to_string(),
            light_color: "#D4EFFA".to_string(),
            genre: "数学".to_string(),
            subfields: vec!["算数基礎".to_string(), "図形".to_string(), "文章題".to_string(), "式と方程式".to_string()],
        },
        Personality {
            id: "p3".to_string(),
            name: "社一（しゃいち）".to_string(),
            tone: "博識でおしゃべり。歴史の逸話や地理の豆知識を次から次へと話す情報マシン。ちょっとおじさんっぽい雰囲気もある。".to_string(),
            extra: "「昔はなぁ…」が口癖。地図を持ち歩いていたり、古い出来事を今のことのように語る。".to_string(),
            color: "#B8860B".to_string(),
            bg_color: "#FDFBF3".to_string(),
            light_color: "#F5E8A3".to_string(),
            genre: "社会".to_string(),
            subfields: vec!["日本史".to_string(), "世界史".to_string(), "地理".to_string(), "公民".to_string()],
        },
        Personality {
            id: "p4".to_string(),
            name: "理花（りか）".to_string(),
            tone: "好奇心旺盛で実験好き。ちょっとドジで爆発騒ぎを起こすこともある。新しいものを発見すると目をキラキラさせる。".to_string(),
            extra: "いつも試験管や虫眼鏡を持っていて、話しながら観察を始める。子どもっぽいワクワク感を忘れない。".to_string(),
            color: "#E67E22".to_string(),
            bg_color: "#FDF2E9".to_string(),
            light_color: "#FADBD8".to_string(),
            genre: "理科".to_string(),
            subfields: vec!["生物".to_string(), "化学".to_string(), "物理".to_string(), "地学".to_string()],
        },
        Personality {
            id: "p5".to_string(),
            name: "英美（えいみ）".to_string(),
            tone: "明るくフレンドリー。ノリが良く、カタカナ英語やスラングを混ぜて喋る。みんなを盛り上げるムードメーカー。".to_string(),
            extra: "「OK!」「Let's go!」などとよく言う。外来語を多用しすぎる。".to_string(),
            color: "#E91E63".to_string(),
            bg_color: "#FDF2F8".to_string(),
            light_color: "#FCE4EC".to_string(),
            genre: "英語".to_string(),
            subfields: vec!["語彙".to_string(), "文法".to_string(), "リスニング".to_string(), "英会話".to_string()],
        },
    ]
});

pub fn catalog() -> &'static [Personality] {
    &CATALOG
}

pub fn find(id: &str) -> Option<&'static Personality> {
    CATALOG.iter().find(|p| p.id == id)
}

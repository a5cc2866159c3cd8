use enquete_import::{ParsedSurvey, parse};

/// The online-shopping usage survey shipped with the import manual.
///
/// Exercises every question kind: single choice, multi choice with an
/// "other" option, ranking, and free text. Note that only the first line is
/// a `# ` heading, so every question lands in the synthesized default
/// section, and the stray `## ` line near the top is ignored because no
/// section is open yet.
pub const ONLINE_SHOPPING: &str = "\
# オンラインショッピング利用調査テスト

## ネット通販の利用状況についてお聞きします

### オンラインショッピングの利用頻度は？
□ 週に複数回
□ 週に1回程度
□ 月に2-3回
□ 月に1回程度
□ ほとんど利用しない

#### よく購入するカテゴリーは？（複数選択可）
□ 衣類・ファッション
□ 家電製品
□ 書籍・雑誌
□ 食品・飲料
□ 日用品
□ 趣味・娯楽用品
□ その他

$$$1-3 オンラインショップ選択時の重要な要素を3つまで順位をつけてお答えください
□ 価格の安さ
□ 商品の品質
□ 配送の速さ
□ 返品・交換の容易さ
□ レビューの評価
□ ブランドの信頼性

##### オンラインショッピングで改善してほしい点があれば教えてください

### テスト用の単純なランキング質問
$$$1-3 好きな色を3つ選んでください
□ 赤
□ 青
□ 緑
□ 黄色
□ 紫
";

/// Parsed form of [`ONLINE_SHOPPING`].
pub fn online_shopping() -> ParsedSurvey {
    parse(ONLINE_SHOPPING)
}

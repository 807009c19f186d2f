//! The Phase 0 briefing deck: 33 slides of fixed Japanese business
//! content, expressed as a deck plan.

use deck_core::{
    BulletLine, Color, ContentSpec, DeckPlan, QuadrantPane, QuadrantSpec, Result, SectionSpec,
    StyleConfig, StyledLine, TitleSpec, TwoColumnSpec,
};

fn styled(text: &str, size: f64, bold: bool, color: Color) -> BulletLine {
    StyledLine::new(text).size(size).bold(bold).color(color).into()
}

/// Assemble the full briefing plan.
pub fn briefing_plan() -> Result<DeckPlan> {
    let s = StyleConfig::default();
    // Emphasized bullet at the default body size.
    let em = |text: &str| -> BulletLine {
        StyledLine::new(text).bold(true).color(s.emphasis).into()
    };

    let mut plan = DeckPlan::new(33);

    plan.insert(
        1,
        TitleSpec::new(
            "Phase 0「要件設計」コンサルティングのご説明",
            "何を、なぜ、どのように進めるか",
            "2026年2月16日",
            "株式会社PreSoft / eMu　上田昌夫",
        ),
    )?;

    plan.insert(
        2,
        TwoColumnSpec::new(2, "本日のお話の位置づけ ── これまでとの違い")
            .left(
                "これまで（12月・1月）",
                vec![
                    "■ 現状の構造的課題の可視化".into(),
                    "　 → 3つの構造的要因を特定".into(),
                    "".into(),
                    "■ 「仕事ナビ」構想の提言".into(),
                    "　 → 3原則と改革の方向性".into(),
                    "".into(),
                    "■ 変革の方向性への合意".into(),
                ],
            )
            .right(
                "本日（2月）",
                vec![
                    "■ コンサルティングの進め方の説明".into(),
                    "　 → なぜこの方法なのか".into(),
                    "".into(),
                    "■ Phase 0 で何をするか".into(),
                    "　 → 具体的な活動と成果物".into(),
                    "".into(),
                    "■ 皆さまにお願いすること".into(),
                ],
            )
            .note("今日は「何を・どう進めるか」のお話です"),
    )?;

    plan.insert(
        3,
        ContentSpec::new(3, "確認：私たちが共有した「現状認識」")
            .bullets(vec![
                "ヒアリングから、3つの構造的課題が明らかになりました：".into(),
                "".into(),
                em("① データの「つなぎ目」の分断"),
                "　  → 多重入力、月次決算が翌月25日まで確定しない".into(),
                "".into(),
                em("② ルール・知識の属人化"),
                "　  → 按分ルール、手当計算、請求条件が担当者の頭の中に".into(),
                "".into(),
                em("③ 業務の不可視と「依頼-実行」関係の不全"),
                "　  → 作業量が見えない、問い合わせが1日30-50件".into(),
            ])
            .note("これは「個人の問題」ではなく「仕組みの問題」です（12月報告書にて共有済み）"),
    )?;

    plan.insert(
        4,
        ContentSpec::new(4, "確認：合意いただいた改革の方向性").bullets(vec![
            "3つの変革原則：".into(),
            em("　❶ 源流入力による一気通貫（リアルタイム・一個流し）"),
            em("　❷ 「知識」と「作業」の分離（ナレッジ・セントラル）"),
            em("　❸ 計画と実績による業務の可視化（PDマネジメント）"),
            "".into(),
            "実現のロードマップ：".into(),
            styled(
                "　Phase 0：都市計画の策定（3ヶ月）← 今日はここの中身です",
                22.0,
                true,
                s.emphasis,
            ),
            "　Phase 1：業務構造の整理と「止血」".into(),
            "　Phase 2：パイロット検証".into(),
            "　Phase 3：全社展開と継続的進化".into(),
        ]),
    )?;

    plan.insert(
        5,
        ContentSpec::new(5, "本日ご説明する4つのテーマ")
            .bullets(vec![
                "".into(),
                styled("①  なぜこの進め方なのか", 24.0, true, s.accent_one),
                "　　── コンサルティングの基本的な考え方".into(),
                "".into(),
                styled("②  何を・何のために行うか", 24.0, true, s.accent_one),
                "　　── Phase 0 の具体的な活動内容".into(),
                "".into(),
                styled("③  何が出来上がるのか", 24.0, true, s.accent_one),
                "　　── 成果物のイメージ".into(),
                "".into(),
                styled("④  皆さまにお願いすること", 24.0, true, s.accent_one),
                "　　── 風の村としてのご協力事項".into(),
            ])
            .note("ご説明 約40分 ＋ 質疑応答 約20分"),
    )?;

    plan.insert(
        6,
        SectionSpec::new("①", "なぜこの進め方なのか")
            .subtitle("コンサルティングの基本的な考え方"),
    )?;

    plan.insert(
        7,
        ContentSpec::new(7, "よくある失敗パターン（風の村でも起きていること）")
            .bullets(vec![
                "「困った → ベンダーに相談 → パッケージ導入 → 合わない → 手作業が残る」".into(),
                "".into(),
                "■ 風の村での実例：".into(),
                "　・「ほのぼの」── 請求書の名寄せに非対応 → 紙5,000通の発送が残った".into(),
                "　・ 給与システム ── 特殊手当を計算できず、手で上書き（強制入力）".into(),
                "　・ 按分処理 ── 「楽々精算」等で対応しきれず手作業が継続".into(),
                "　・ ベンダーに相談 →「膨大なコストがかかるから今のままの方がいい」".into(),
                "".into(),
                styled(
                    "なぜこうなるか：業務の設計図なしにシステムを選んでいるから",
                    22.0,
                    true,
                    s.emphasis,
                ),
            ])
            .note("比喩：「既製服を買ってから体に合わせて切る」のではなく「まず採寸してオーダーメイドする」"),
    )?;

    plan.insert(
        8,
        TwoColumnSpec::new(8, "私たちの考え方：「ビル建て替え」ではなく「都市計画」")
            .left(
                "ビル建て替え（従来型）",
                vec![
                    "・古いシステムを新しく置き換える".into(),
                    "・一発勝負（失敗すると大損害）".into(),
                    "・完成するまで効果が見えない".into(),
                    "・終わったら「次の建て替え」まで放置".into(),
                ],
            )
            .right(
                "都市計画（私たちのアプローチ）",
                vec![
                    "・まずマスタープランを描く".into(),
                    "・区画ごとに段階的に整備".into(),
                    "・今の建物を使いながら進める".into(),
                    "・終わりのない「まちづくり」".into(),
                ],
            )
            .note("Phase 0 ＝ マスタープラン策定。「設計図なしに工事は始めません」"),
    )?;

    plan.insert(
        9,
        ContentSpec::new(9, "業務を「4つの視点」で設計する")
            .bullets(vec![
                "都市計画が道路・水道・用途地域・建築基準をセットで設計するように、".into(),
                "業務改革も4つの視点をセットで設計します：".into(),
                "".into(),
                styled("❶ 業務の流れ", 22.0, true, s.accent_one),
                "　　誰が何をどの順番で行うか（＝道路計画）".into(),
                "".into(),
                styled("❷ 情報の流れ", 22.0, true, s.accent_one),
                "　　どのデータがどこで生まれ、どこに届くか（＝上下水道計画）".into(),
                "".into(),
                styled("❸ 道具の配置", 22.0, true, s.accent_one),
                "　　どのシステムがどの仕事を助けるか（＝用途地域計画）".into(),
                "".into(),
                styled("❹ 基盤", 22.0, true, s.accent_one),
                "　　全体を支えるインフラ（＝建築基準）".into(),
            ])
            .note("この4つをバラバラに検討すると「つなぎ目」が生まれます。だからセットで設計します"),
    )?;

    plan.insert(
        10,
        ContentSpec::new(10, "組織を「3つの階層」で捉える")
            .bullets(vec![
                "風の村の活動全体を一つのシステムとして見ると、3つの階層に整理できます：".into(),
                "".into(),
                styled("❶ サービス提供の層", 22.0, true, s.accent_one),
                "　　利用者からの依頼を受け、サービスを提供し、記録・請求する流れ".into(),
                "".into(),
                styled("❷ 経営資源を管理する層", 22.0, true, s.accent_one),
                "　　人・モノ・お金・時間を配分し管理する仕事（人事給与、経理等）".into(),
                "".into(),
                styled("❸ 現場で実行する層", 22.0, true, s.accent_one),
                "　　日々のシフト実行、入金処理、物品発注など実世界との接点".into(),
                "".into(),
                styled(
                    "各階層の中に「知識（ルール）」「計画と実績」「報告」の3つの側面があります",
                    18.0,
                    false,
                    s.muted,
                ),
            ])
            .note("今、風の村では層と層の「つなぎ目」で情報が途切れている。これが多重入力の根本原因です"),
    )?;

    plan.insert(
        11,
        ContentSpec::new(11, "仕事の流れを設計する3つの原則")
            .bullets(vec![
                "私たちが業務の流れを設計するときの3つの原則：".into(),
                "".into(),
                styled("❶ 計画 → 実行 → 確認（PDマネジメント）", 22.0, true, s.accent_one),
                "　　計画を立て、実績を記録し、差を見て修正する".into(),
                "　　計画通りにいかないことが前提。リアルタイムに状況を把握する".into(),
                "".into(),
                styled("❷ 依頼 → 約束 → 実行 → 検収", 22.0, true, s.accent_one),
                "　　すべての仕事は「頼む → 引き受ける → やる → 確認する」の4ステップ".into(),
                "　　比喩：レストランの注文 → 厨房が受ける → 調理 → お客様が確認".into(),
                "".into(),
                styled("❸ リアルタイム・一つずつ確実に", 22.0, true, s.accent_one),
                "　　月末にまとめて処理するのではなく、発生のたびに完結させる".into(),
            ])
            .note("この原則がシステムに反映されていないと、途中で情報が途切れます"),
    )?;

    plan.insert(
        12,
        TwoColumnSpec::new(12, "この原則を当てはめると何が変わるか")
            .left(
                "現状",
                vec![
                    "・月末にまとめて按分計算".into(),
                    "　→ 月末の業務集中と遅延".into(),
                    "".into(),
                    "・紙の請求書を手作業で照合".into(),
                    "　→ 5,000通の紙が毎月発生".into(),
                    "".into(),
                    "・シフト確定が25日ギリギリ".into(),
                    "　→ 人件費の見通しが立たない".into(),
                    "".into(),
                    "・ベンダーに「変えられない」と言われる".into(),
                ],
            )
            .right(
                "原則適用後",
                vec![
                    "・サービス記録時点で按分が自動連携".into(),
                    "　→ リアルタイムで経営数値を把握".into(),
                    "".into(),
                    "・請求データが日次で確定".into(),
                    "　→ 紙を大幅に削減".into(),
                    "".into(),
                    "・計画と実績の差がリアルタイムで見える".into(),
                    "　→ 早期の軌道修正が可能".into(),
                    "".into(),
                    "・設計図があるから要望を正確に伝えられる".into(),
                ],
            )
            .note("原則に沿って業務を再設計するから、システムが変わった後も仕組みが崩れません"),
    )?;

    plan.insert(
        13,
        ContentSpec::new(13, "ヒアリングの方法：「聴く」から「構造化する」へ").bullets(vec![
            "■ 一般的なヒアリング：".into(),
            "　「何に困っていますか？」→ バラバラの要望リスト → 構造がない".into(),
            "".into(),
            styled("■ 私たちのヒアリング：", 20.0, true, s.accent_one),
            "　 散らばった声から「共通の型（パターン）」を見つける".into(),
            "".into(),
            "　・質的研究手法（M-GTA等）：一人ひとりの話から組織全体の型を発見".into(),
            "　・KJ法：バラバラの情報を構造的に整理".into(),
            "　・生成AI：大量の聞き取り情報を高速にパターン化する道具".into(),
            "".into(),
            styled(
                "11月のヒアリングで「個別の愚痴」が「3つの共通構造問題」に集約できたのは、",
                18.0,
                false,
                s.muted,
            ),
            styled("この手法を使ったからです。", 18.0, false, s.muted),
        ]),
    )?;

    plan.insert(
        14,
        ContentSpec::new(14, "「要件設計」とは何か")
            .bullets(vec![
                styled(
                    "「要件設計」はシステムの仕様書ではありません。",
                    22.0,
                    true,
                    s.emphasis,
                ),
                "".into(),
                "「風の村の業務が、将来どのように流れるべきか」を描いた設計図です。".into(),
                "".into(),
                "4つの階層で設計します：".into(),
                "　❶ 業務要件　── 「こういう仕事の流れにしたい」".into(),
                "　❷ 運用要件　── 「現場ではこう使いたい」".into(),
                "　❸ 機能要件　── 「こういうことができる道具がほしい」".into(),
                "　❹ システム要件 ── 「その道具を動かすための条件」".into(),
            ])
            .note("比喩：注文住宅を建てるとき、施主が「どう暮らしたいか」を伝え、建築士が「間取り図」と「設備仕様書」に翻訳する"),
    )?;

    plan.insert(
        15,
        ContentSpec::new(15, "私たちの3つの約束").bullets(vec![
            "".into(),
            "".into(),
            styled("❶  全体を見てから、部分を決めます", 28.0, true, s.primary),
            "　　 部分最適ではなく、全体最適を設計する".into(),
            "".into(),
            "".into(),
            styled("❷  現場の言葉を、設計の言葉に翻訳します", 28.0, true, s.primary),
            "　　 技術ではなく、業務の視点から入る".into(),
            "".into(),
            "".into(),
            styled("❸  設計図ができてから、工事を始めます", 28.0, true, s.primary),
            "　　 手戻りを最小化する".into(),
        ]),
    )?;

    plan.insert(
        16,
        SectionSpec::new("②", "何を・何のために行うか")
            .subtitle("Phase 0「要件設計」の具体的な進め方"),
    )?;

    plan.insert(
        17,
        ContentSpec::new(17, "Phase 0 の全体像：3ヶ月間の活動")
            .bullets(vec![
                styled("3つの活動を並行して進めます：", 22.0, true, s.primary),
                "".into(),
                styled("A. ヒアリング調査（約2ヶ月間）", 22.0, true, s.accent_one),
                "　　 1日2回 × 週2日 × 約2ヶ月 ＝ 25～30セッション".into(),
                "".into(),
                styled("B. 隔週プロジェクト会議（全期間）", 22.0, true, s.accent_one),
                "　　 2週間に1回 × 約3ヶ月 ＝ 6回程度".into(),
                "".into(),
                styled("C. 分析・設計作業（コンサルタント側）", 22.0, true, s.accent_one),
                "　　 ヒアリング → 構造化 → 設計 → マスタープラン策定".into(),
            ])
            .note("3ヶ月後のアウトプット：マスタープラン ＋ 要件定義書 ＋ マスターデータ構造設計"),
    )?;

    plan.insert(
        18,
        ContentSpec::new(18, "活動① ヒアリング調査 ── 皆さまの「仕事」を丸ごと理解する")
            .bullets(vec![
                "■ 規模：約25～30回のセッション（1回 90分目安）".into(),
                "■ ペース：1日2回 × 週2日 × 約2ヶ月".into(),
                "■ 対象：管理本部の各部署 ＋ 現場（事業所）".into(),
                "".into(),
                "■ ヒアリングで聞くこと：".into(),
                "　・今のお仕事の流れを、最初から最後まで教えてください".into(),
                "　・困っていること、工夫していること、変えたいこと".into(),
                "　・他の部署や現場とのやりとり".into(),
                "".into(),
                styled(
                    "「技術の話はしません。仕事の話を聞かせてください」",
                    22.0,
                    true,
                    s.accent_two,
                ),
            ])
            .note("11月に管理本部5部署で実施したヒアリングを、全部署・現場に広げるイメージです"),
    )?;

    plan.insert(
        19,
        ContentSpec::new(19, "活動② 隔週プロジェクト会議 ── 経過の共有と方向性の確認")
            .bullets(vec![
                "■ 頻度：2週間に1回（約1時間）".into(),
                "■ 参加：風の村側プロジェクト責任者・主要メンバー ＋ コンサルタント".into(),
                "".into(),
                "■ 各回の内容：".into(),
                "　・ヒアリングで見えてきたことの中間報告".into(),
                "　・方向性の確認と軌道修正".into(),
                "　・次の2週間の計画共有".into(),
                "".into(),
                styled(
                    "「密室で分析するのではなく、進捗を常に共有します」",
                    22.0,
                    true,
                    s.accent_two,
                ),
            ])
            .note("進め方に疑問や懸念があれば、この場でいつでも方向修正できます"),
    )?;

    plan.insert(
        20,
        ContentSpec::new(20, "活動③ 分析・設計作業 ── ヒアリングの「裏側」").bullets(vec![
            "コンサルタント側で、ヒアリングの合間に以下の作業を進めます：".into(),
            "".into(),
            "　Step 1  ヒアリング内容の文字起こし・整理（AI活用）".into(),
            "　Step 2  業務フローの可視化（誰が・何を・いつ・どのデータで）".into(),
            "　Step 3  課題の分類と構造化（パターンの抽出）".into(),
            "　Step 4  あるべき業務モデルの設計".into(),
            "　Step 5  システム要件への変換".into(),
            "".into(),
            styled(
                "1回1回のヒアリングが、設計図の一部になっていきます",
                22.0,
                true,
                s.accent_two,
            ),
        ]),
    )?;

    plan.insert(
        21,
        ContentSpec::new(21, "なぜ25～30回もの聞き取りが必要なのか")
            .bullets(vec![
                "".into(),
                styled("❶ 約50拠点の多様な業務を網羅するため", 22.0, true, s.primary),
                "　　介護・保育・障害の各事業で業務が異なる".into(),
                "".into(),
                styled("❷ 部署間の「つなぎ目」を見つけるため", 22.0, true, s.primary),
                "　　構造的な問題は、部署と部署の接点に潜んでいる".into(),
                "".into(),
                styled("❸ 十分な事例数で「共通の型」を抽出するため", 22.0, true, s.primary),
                "　　少数の聞き取りでは、偏った設計図になってしまう".into(),
                "".into(),
                styled("❹ 設計の精度を上げ、後の手戻りを防ぐため", 22.0, true, s.primary),
                "　　設計図が粗いと、工事段階で想定外の問題が起きる".into(),
            ])
            .note("比喩：健康診断で血液検査1項目だけでは診断できない。全身を調べるから的確な治療方針が立てられる"),
    )?;

    plan.insert(
        22,
        ContentSpec::new(22, "都市計画に例えると ── Phase 0 の位置づけ").bullets(vec![
            "".into(),
            styled("ヒアリング ＝ 住民への聞き取り調査", 24.0, true, s.accent_one),
            "　今どこに住んで、どう暮らしているか".into(),
            "".into(),
            styled("業務分析 ＝ 地質調査・交通量調査", 24.0, true, s.accent_one),
            "　地盤の強さや人の流れを把握する".into(),
            "".into(),
            styled("要件設計 ＝ マスタープラン策定", 24.0, true, s.accent_one),
            "　ゾーニング、道路計画、優先整備エリアを決める".into(),
            "".into(),
            "".into(),
            styled(
                "Phase 0 では「工事」はしません。設計図を共有し、合意してから着工します。",
                20.0,
                true,
                s.emphasis,
            ),
        ]),
    )?;

    plan.insert(
        23,
        SectionSpec::new("③", "何が出来上がるのか").subtitle("Phase 0 の成果物"),
    )?;

    plan.insert(
        24,
        ContentSpec::new(24, "Phase 0 で皆さまにお渡しするもの").bullets(vec![
            "".into(),
            styled("3つの成果物：", 24.0, true, s.primary),
            "".into(),
            styled(
                "❶  マスタープラン（基本計画 ＋ 実施計画）",
                24.0,
                true,
                s.accent_one,
            ),
            "　　「どこから・どう変えるか」の全体計画".into(),
            "".into(),
            styled("❷  要件定義書", 24.0, true, s.accent_one),
            "　　「仕事ナビ」に何が必要かの仕様".into(),
            "".into(),
            styled("❸  マスターデータ構造設計", 24.0, true, s.accent_one),
            "　　「情報の背骨」の設計図".into(),
        ]),
    )?;

    plan.insert(
        25,
        ContentSpec::new(25, "① マスタープラン ── 「どこから・どう変えるか」の全体計画")
            .bullets(vec![
                styled("■ 基本計画", 22.0, true, s.accent_one),
                "　・現状の業務構造の全体像（可視化された業務フロー）".into(),
                "　・あるべき姿の設計（仕事ナビ構想に基づく将来モデル）".into(),
                "　・ギャップ分析（現状と将来像のギャップ一覧）".into(),
                "".into(),
                styled("■ 実施計画", 22.0, true, s.accent_one),
                "　・優先順位の提案（どの業務エリアから着手するか）".into(),
                "　・フェーズ分けと概算スケジュール".into(),
                "　・必要なリソースと投資規模の概算".into(),
                "".into(),
                styled(
                    "経営判断の材料として使えるものを作ります",
                    22.0,
                    true,
                    s.emphasis,
                ),
            ]),
    )?;

    plan.insert(
        26,
        ContentSpec::new(26, "② 要件定義書 ── 「仕事ナビ」に何が必要かの仕様")
            .bullets(vec![
                "4つの階層で、業務の「設計図」を描きます：".into(),
                "".into(),
                "　❶ 業務要件　── 新しい業務の流れの定義".into(),
                "　　（例：請求処理はこう変わる）".into(),
                "".into(),
                "　❷ 運用要件　── 日常の運用ルールの定義".into(),
                "　　（例：データ入力の締め日はいつか）".into(),
                "".into(),
                "　❸ 機能要件　── システムに必要な機能の一覧".into(),
                "　　（例：自動按分計算、リアルタイム進捗表示）".into(),
                "".into(),
                "　❹ システム要件 ── 技術面の条件".into(),
            ])
            .note("比喩：注文住宅の「間取り図」と「設備仕様書」。これがあれば、ベンダーに要望を正しく伝えられます"),
    )?;

    plan.insert(
        27,
        TwoColumnSpec::new(27, "③ マスターデータ構造設計 ── 「情報の背骨」の設計図")
            .left(
                "現状（バラバラ）",
                vec![
                    "・ほのぼの、MJS、弥生、勤怠システム…".into(),
                    "　 それぞれに職員情報・事業所情報を登録".into(),
                    "".into(),
                    "・同じ職員が各システムで別の番号".into(),
                    "・事業所の名称表記がシステムごとに違う".into(),
                    "".into(),
                    "→ これが多重入力と不整合の根本原因".into(),
                ],
            )
            .right(
                "あるべき姿（統一）",
                vec![
                    "・全システム共通の「元データ」を設計".into(),
                    "".into(),
                    "・職員マスタ、事業所マスタ、".into(),
                    "　 勘定科目マスタ、サービスマスタ等".into(),
                    "".into(),
                    "・一箇所で更新すれば全体に反映".into(),
                    "".into(),
                    "→ 「One Fact, One Place」の実現".into(),
                ],
            )
            .note("比喩：住所体系の統一。番地がバラバラでは郵便も届きません"),
    )?;

    plan.insert(
        28,
        SectionSpec::new("④", "皆さまにお願いすること").subtitle("風の村としてのご協力事項"),
    )?;

    plan.insert(
        29,
        ContentSpec::new(29, "Phase 0 を成功させるための4つのお願い").bullets(vec![
            "".into(),
            styled(
                "❶  ヒアリング対象者の選定と日程調整",
                24.0,
                true,
                s.primary,
            ),
            "　　各部署・事業所から、実務を担当されている方をご指名ください".into(),
            "".into(),
            styled("❷  既存資料・システム情報のご提供", 24.0, true, s.primary),
            "　　マニュアル、帳票、システム仕様書等（完璧でなくて構いません）".into(),
            "".into(),
            styled("❸  隔週プロジェクト会議へのご参加", 24.0, true, s.primary),
            "　　2週間に1回、約1時間の経過共有の場です".into(),
            "".into(),
            styled(
                "❹  プロジェクト責任者・連絡窓口のご決定",
                24.0,
                true,
                s.primary,
            ),
            "　　意思決定者と日常のやりとり担当者をそれぞれ1名".into(),
        ]),
    )?;

    plan.insert(
        30,
        ContentSpec::new(30, "なぜ「お任せ」ではなく「一緒に」なのか")
            .bullets(vec![
                "".into(),
                "コンサルタントは、業務設計の専門家です。".into(),
                "".into(),
                styled(
                    "しかし、風の村の業務の専門家は、皆さまです。",
                    24.0,
                    true,
                    s.primary,
                ),
                "".into(),
                "設計図は、使う人と一緒に描かなければ、".into(),
                "使える設計図になりません。".into(),
                "".into(),
                "一緒に作った設計図だからこそ、".into(),
                "実行段階で「自分たちのもの」になります。".into(),
                "".into(),
                styled(
                    "大きな体制は不要です。少人数で機動的に進めます。",
                    20.0,
                    false,
                    s.muted,
                ),
            ])
            .note("比喩：注文住宅は、打ち合わせに参加した人ほど完成後の満足度が高い"),
    )?;

    plan.insert(
        31,
        ContentSpec::new(31, "ヒアリングを受ける方へのメッセージ")
            .bullets(vec![
                "".into(),
                "".into(),
                styled("正解を答える場ではありません。", 28.0, true, s.primary),
                "".into(),
                styled(
                    "日頃の仕事を、そのまま教えてください。",
                    28.0,
                    true,
                    s.primary,
                ),
                "".into(),
                "".into(),
                "困っていること、工夫していること、".into(),
                "「なんでこうなってるんだろう」と感じていること。".into(),
                "".into(),
                "何を言っても大丈夫です。誰が何を言ったかは報告しません。".into(),
            ])
            .note("部長の皆さまから現場の方への声掛けをお願いします。「自由に話していい」という安心感がヒアリングの質を決めます"),
    )?;

    plan.insert(
        32,
        QuadrantSpec::new(
            32,
            "まとめ：Phase 0 で実現すること",
            [
                QuadrantPane::new(
                    "① 考え方",
                    vec![
                        "都市計画アプローチ".to_string(),
                        "4つの視点 × 3つの階層".to_string(),
                        "3つの原則で業務プロセス設計".to_string(),
                    ],
                    s.accent_one,
                    s.quadrant_tint_one,
                ),
                QuadrantPane::new(
                    "② 活動内容",
                    vec![
                        "ヒアリング25-30回".to_string(),
                        "隔週プロジェクト会議".to_string(),
                        "分析・設計作業（3ヶ月）".to_string(),
                    ],
                    s.accent_two,
                    s.quadrant_tint_two,
                ),
                QuadrantPane::new(
                    "③ 成果物",
                    vec![
                        "マスタープラン".to_string(),
                        "要件定義書".to_string(),
                        "マスターデータ構造設計".to_string(),
                    ],
                    s.accent_one,
                    s.quadrant_tint_one,
                ),
                QuadrantPane::new(
                    "④ お願い",
                    vec![
                        "対象者選定・日程調整".to_string(),
                        "資料提供".to_string(),
                        "会議参加・体制決定".to_string(),
                    ],
                    s.accent_two,
                    s.quadrant_tint_two,
                ),
            ],
        ),
    )?;

    plan.insert(
        33,
        ContentSpec::new(33, "次のステップ")
            .bullets(vec![
                "".into(),
                styled(
                    "☐  本日の内容に関するご質問・ご意見（この場で）",
                    22.0,
                    false,
                    s.text,
                ),
                "".into(),
                styled("☐  プロジェクト責任者・連絡窓口のご指名", 22.0, false, s.text),
                "".into(),
                styled(
                    "☐  ヒアリング対象部署・対象者リストの作成",
                    22.0,
                    false,
                    s.text,
                ),
                "".into(),
                styled("☐  契約手続きの確認", 22.0, false, s.text),
                "".into(),
                styled("☐  キックオフ会議の日程調整", 22.0, false, s.text),
            ])
            .note("スケジュール案：3月キックオフ → 4月ヒアリング本格実施 → 5月分析・設計・最終報告"),
    )?;

    Ok(plan)
}

//! バイナリクレート内の結合テスト（Stub アダプタで usecase / wiring / Runner を検証）

mod support;

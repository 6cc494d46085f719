//! Fixed PKCS#1 v1.5 / SHA-256 signatures used across the unit tests.

pub(crate) struct Vector {
    pub message: &'static [u8],
    pub exponent: u32,
    /// SHA-256 of `message`, hex.
    pub digest: &'static str,
    /// Big-endian modulus, hex.
    pub n: &'static str,
    /// Big-endian signature, hex.
    pub sig: &'static str,
}

pub(crate) const RSA1024_F4: Vector = Vector {
    message: b"hello world! test#123",
    exponent: 65537,
    digest: "dc9be58f7a8537d74b2c846f3921f854d5aac160fd397c0dfb2a5c9369ace955",
    n: "abb48b6f8582c81915132e18e6df01250564b5fc0eb4ee412682199fe37e592d\
        14ea032c6d3a5011b004dad0d88ac2cbc8f1284dd983e93079eefd60f55f1860\
        95585fe605a9b2616d1542fc68d77fc311135626f235ddea50da2240602cfdb6\
        eeb02fff5aca4b9a6263531a7de4f63df3d11d8e115b078611e909603ea8da2b",
    sig: "4269a0a4ae76a9a07dfb7b6aee52358de453eb39214b98b25c90fe72f57529a6\
        88cefc90ee7da873674b5ad554f7c46041350bc7f076a9c4e84de1ef6987cb1e\
        77dd3014809cb9c40caa592b4ea82aac690ed129d76dc05c925108b9076423b1\
        1bb41cf856b5869a0a70b28758e5fbb79983e13c2d3615b4575c1b533a5de3c6",
};

pub(crate) const RSA2048_F4: Vector = Vector {
    message: b"Hello World! This is Noir-RSA",
    exponent: 65537,
    digest: "5bcf2e3c1699d990027fe08fb52d20787a83a64fa6b72b9e746949cfc44d2105",
    n: "cc1082263397fcd669128875f5935116e87dc2e22372d5fb62659b852802be7f\
        6cacdb9165520d8d3dc55a8145ddbd10147275028d780568a25c314ca927256a\
        80d2d4310488329f1d1e0732ef19f7d78764ed989f03c69577ae9e14944acce1\
        f24ceb605070db057bfa9ace1612d23d80d846bd332051ff910993b36a6f1db8\
        30f8843bc20096f3b77c79f43d0b24c39a848015470a00199e672965155e3201\
        7b78a1fc3f6fe5bac429fa42afc80a6a4ce95b84a1ddbdb3c53ac92f5020215c\
        8389ca8fe3adbf98ee48aef5c01702b53445c49c10af4f6c543f88c19ea0c90d\
        102eb8bc060c8a88cc5d0522294635854792da889f79bbfc68d54a635cd0e831",
    sig: "88ff819c8116267c5019872c5100b9ff64c1433b426083709052f1ae6854545e\
        61e6138610958b80eec78b0cf2a8f3a77f2efb157c7a48bd73a81adfec5f07ee\
        da6cc03909b0e50560e63cb891632957f2eb9ee61565f2ecaad45dedf02116ff\
        30232cde2314d02654c09380fdb38b6e0d591568a9b5baeac6d04522345bb02f\
        0965f6fd9d6f21f59cc3198556b85477aee525e1c93911adce14b111f86cd020\
        a53a9c48ac528c24ca39b09a279fbcc8983ce0714f45744eb2619a64d1e4ff21\
        f508604776c2a0f4377056296b5946ea923b1785ba362d8cad482bda5e914ad8\
        c1d64ce2c30545d1fc5778cac9632b09fbab04d22ec180850e740a4f5af94a58",
};

pub(crate) const RSA2048_E3: Vector = Vector {
    message: b"hello world",
    exponent: 3,
    digest: "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9",
    n: "beb47376bcb35cf73bc3f1385187723b182d285434bd9157b0fc988c223fc19d\
        673cd8f4612720d66b7cbaf2460082a1ef3d37096533ab6bc49f4cb763adeec7\
        d1ce66cd673e90f515c426c1df14d0f55285ff73a8fa57151888896d3326f4a1\
        f482c5a39d274bbd7cff84128b74dd50edeee821652d6a99f2ab19ceea6ccf6c\
        d0dffff6ce063882904bd4d127b51686bcce55c45a29d036447d1e68511dcd40\
        6b992a9801202d47582eb70820eb5c28ce422ba7ee651886f8fa83ee4923cb21\
        2c56e42c589f343566bf92f2715a32318b578ab7ce0f18a3e1c48a36cc0b7759\
        2768c1e83bc198db8c46d11d6b1ffc5a3e9326dde49552ee5b86d744947d2a59",
    sig: "44d1cff99e401300fff74799e7dde9296b7c1a0964f8e53bfdcc9656261efe95\
        9b1aa843af1cfc4e128477f8f972343a934e1bea67e1c0c6536d0b38e2fd507a\
        acbd700e3dac36c5e8bc83048f0ad9c246004265cbcd1012d068bda4ea9efe1b\
        ddeaf02b1b16ce6f065c3d39e8000a2128bef2b8fe5820cc67bf24f58d7e0675\
        8d1c218844acf41f5fc97f0a68e49a2a4f843bb2ed6ca058f9a5cf2c7a15ae98\
        80175e12872700def99eb435d358f9999df17a789738e68bb40c720c8a484fa5\
        e8dba1c611e8c98db1f942af28e44d91ad9fc3fe8772b9e5d205f0d64367f9b9\
        41765cbb0a28e1227e8fa85815b5ab7ace68e641a99ee46f4b48948db898d56a",
};

pub(crate) const RSA1024_E3: Vector = Vector {
    message: b"hello world",
    exponent: 3,
    digest: "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9",
    n: "a832137e0286e1d10cf9ae5bbfec5eb936cfa586df0cef237a5441bb4f69bc0e\
        c7e315848b8b237dcafe6d12f3775b23aca7ffaa3dacadb2b5f163e515efe19f\
        a06a5a57d596ba6dbb7f44ca4aad357a594c35d3fbb695ad440a6d090912ecef\
        560b97278d400662e35522dff48d4878e1265719c760352dd266104c73d124e7",
    sig: "a458255a8d9a8886a97714c9dd3c9f419dae5979aa18f702d7bf54a04f3d0845\
        339d6d0d72fb99eee526319534beb4efce80316eeb5eabc692a31cd675e30586\
        35d8216ffc7586c827935448edb617b4862a29777542829d18e9a5bfb4c42faf\
        c4aa573248a2b913b4de9eed2911613f575625bd44c2d95186abf43f2ed81cd4",
};

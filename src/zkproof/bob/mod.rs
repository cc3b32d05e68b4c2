#![allow(non_snake_case)]
/*
    MtA Range Proofs for Bob

    This file is part of the paillier-mta library.

    paillier-mta is free software: you can redistribute
    it and/or modify it under the terms of the GNU General Public
    License as published by the Free Software Foundation, either
    version 3 of the License, or (at your option) any later version.

    @license GPL-3.0+
*/

//! Bob's proofs for the MtA conversion (GG18, appendix A.2 and A.3).
//!
//! Common input is Alice's Paillier key N, the verifier's ring-Pedersen
//! parameters (Ñ, h1, h2), and ciphertexts c1, c2. Bob knows
//! x ∈ [0, q), y ∈ [0, q^5) and r ∈ Z*_N such that
//!             c2 = c1^x · Γ^y · r^N mod N^2.
//!
//! [ProofBobWc] additionally proves that a public point X equals g^x.

use curv::arithmetic::traits::*;
use curv::elliptic::curves::{Curve, Point, Scalar};
use curv::BigInt;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use zeroize::Zeroize;

use super::{point_coords, point_from_coords};
use crate::paillier::PublicKey;
use crate::security_level::{
    MTA_ALPHA_EXP, MTA_GAMMA_EXP, MTA_X_EXP, MTA_Y_EXP,
};
use crate::utilities::encoding::{big_ints_to_bytes, decode_proof_parts};
use crate::utilities::hashing::sha512_256i_tagged;
use crate::utilities::{
    get_random_positive_int, is_in_interval, is_number_in_multiplicative_group,
    mod_pow_with_negative, rejection_sample, sample_relatively_prime_integer,
    RingPedersenParams,
};
use crate::{Error, Result};

const PROOF_BOB_PARTS: usize = 10;
const PROOF_BOB_WC_PARTS: usize = 12;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BobStatement {
    /// Alice's Paillier key, under which c1 and c2 are encrypted.
    pub pk: PublicKey,
    /// The verifier's auxiliary modulus and bases.
    pub rp: RingPedersenParams,
    pub c1: BigInt,
    pub c2: BigInt,
}

#[derive(Clone)]
pub struct BobWitness {
    x: BigInt,
    y: BigInt,
    r: BigInt,
}

impl BobWitness {
    pub fn new(x: BigInt, y: BigInt, r: BigInt) -> Self {
        Self { x, y, r }
    }
}

impl Drop for BobWitness {
    fn drop(&mut self) {
        self.x.zeroize();
        self.y.zeroize();
        self.r.zeroize();
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofBob {
    pub z: BigInt,
    pub z_prm: BigInt,
    pub t: BigInt,
    pub v: BigInt,
    pub w: BigInt,
    pub s: BigInt,
    pub s1: BigInt,
    pub s2: BigInt,
    pub t1: BigInt,
    pub t2: BigInt,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ProofBobWc<E: Curve> {
    pub proof: ProofBob,
    /// u = g^α
    pub u: Point<E>,
}

// Curve-bound part of the challenge input: (X.x, X.y) and (u.x, u.y).
type CurveCheck = ((BigInt, BigInt), (BigInt, BigInt));

fn challenge(
    session: &[u8],
    q: &BigInt,
    statement: &BobStatement,
    curve_check: Option<&CurveCheck>,
    commitments: [&BigInt; 5],
) -> BigInt {
    let gamma = statement.pk.gamma();
    let mut ints: Vec<&BigInt> = vec![
        &statement.pk.n,
        &gamma,
        &statement.rp.ntilde,
        &statement.rp.h1,
        &statement.rp.h2,
    ];
    if let Some(((X_x, X_y), _)) = curve_check {
        ints.push(X_x);
        ints.push(X_y);
    }
    ints.push(&statement.c1);
    ints.push(&statement.c2);
    if let Some((_, (u_x, u_y))) = curve_check {
        ints.push(u_x);
        ints.push(u_y);
    }
    ints.extend(commitments);
    rejection_sample(q, &sha512_256i_tagged(session, &ints).to_bigint())
}

// Γ^m mod N^2 for any m >= 0.
fn gamma_pow(N: &BigInt, NN: &BigInt, m: &BigInt) -> BigInt {
    (BigInt::one() + m * N).modulus(NN)
}

fn prove_core<E: Curve>(
    session: &[u8],
    statement: &BobStatement,
    witness: &BobWitness,
    X: Option<&Point<E>>,
) -> Result<(ProofBob, Option<Point<E>>)> {
    statement.pk.validate()?;
    statement.rp.validate()?;
    let q = Scalar::<E>::group_order();
    let q3 = BigInt::pow(q, MTA_ALPHA_EXP);
    let q7 = BigInt::pow(q, MTA_GAMMA_EXP);
    let q_ntilde = q * &statement.rp.ntilde;
    let q3_ntilde = &q3 * &statement.rp.ntilde;
    let N = &statement.pk.n;
    let NN = statement.pk.n_square();

    if !is_in_interval(&witness.x, &BigInt::pow(q, MTA_X_EXP))
        || !is_in_interval(&witness.y, &BigInt::pow(q, MTA_Y_EXP))
    {
        error!("bob proof witness is outside its range");
        return Err(Error::RangeViolation);
    }

    // Step 1: sample α, ρ, ρ', σ, β, γ, τ
    let alpha = get_random_positive_int(&q3);
    let rho = get_random_positive_int(&q_ntilde);
    let sigma = get_random_positive_int(&q_ntilde);
    let tau = get_random_positive_int(&q3_ntilde);
    let rho_prm = get_random_positive_int(&q3_ntilde);
    let beta = sample_relatively_prime_integer(N);
    let gamma = get_random_positive_int(&q7);

    // Step 2: u = g^α, bound together with X into the challenge
    let (u, curve_check) = match X {
        Some(X) => {
            let u =
                Point::<E>::generator() * Scalar::<E>::from_bigint(&alpha);
            let check = (point_coords(X)?, point_coords(&u)?);
            (Some(u), Some(check))
        }
        None => (None, None),
    };

    // Step 3: commitments
    let z = statement.rp.commit(&witness.x, &rho);
    let z_prm = statement.rp.commit(&alpha, &rho_prm);
    let t = statement.rp.commit(&witness.y, &sigma);
    // v = c1^α · Γ^γ · β^N mod N^2
    let v = BigInt::mod_mul(
        &BigInt::mod_mul(
            &BigInt::mod_pow(&statement.c1, &alpha, &NN),
            &gamma_pow(N, &NN, &gamma),
            &NN,
        ),
        &BigInt::mod_pow(&beta, N, &NN),
        &NN,
    );
    let w = statement.rp.commit(&gamma, &tau);

    // Step 4: challenge
    let e = challenge(
        session,
        q,
        statement,
        curve_check.as_ref(),
        [&z, &z_prm, &t, &v, &w],
    );

    // Step 5: responses
    // s = r^e · β mod N
    let s = BigInt::mod_mul(&BigInt::mod_pow(&witness.r, &e, N), &beta, N);
    let s1 = &e * &witness.x + &alpha;
    let s2 = &e * &rho + &rho_prm;
    let t1 = &e * &witness.y + &gamma;
    let t2 = &e * &sigma + &tau;

    Ok((
        ProofBob {
            z,
            z_prm,
            t,
            v,
            w,
            s,
            s1,
            s2,
            t1,
            t2,
        },
        u,
    ))
}

impl ProofBob {
    /// Proves the relation without a curve check. Uses fresh randomness on
    /// every call.
    pub fn prove<E: Curve>(
        session: &[u8],
        statement: &BobStatement,
        witness: &BobWitness,
    ) -> Result<Self> {
        let (proof, _) = prove_core::<E>(session, statement, witness, None)?;
        Ok(proof)
    }

    pub fn verify<E: Curve>(
        &self,
        session: &[u8],
        statement: &BobStatement,
    ) -> bool {
        self.verify_core::<E>(session, statement, None)
    }

    fn verify_core<E: Curve>(
        &self,
        session: &[u8],
        statement: &BobStatement,
        curve_check: Option<(&Point<E>, &Point<E>)>,
    ) -> bool {
        let q = Scalar::<E>::group_order();
        let q3 = BigInt::pow(q, MTA_ALPHA_EXP);
        let q7 = BigInt::pow(q, MTA_GAMMA_EXP);
        let N = &statement.pk.n;
        let NN = statement.pk.n_square();
        let Nt = &statement.rp.ntilde;

        // range checks
        let in_ntilde = [&self.z, &self.z_prm, &self.t, &self.w]
            .iter()
            .all(|v| is_number_in_multiplicative_group(Nt, v));
        if !in_ntilde
            || !is_number_in_multiplicative_group(&NN, &self.v)
            || !is_number_in_multiplicative_group(N, &self.s)
        {
            debug!("bob proof: commitment outside its group");
            return false;
        }
        if !is_number_in_multiplicative_group(&NN, &statement.c1)
            || !is_number_in_multiplicative_group(&NN, &statement.c2)
        {
            debug!("bob proof: statement ciphertext outside Z*_{{N^2}}");
            return false;
        }
        if [&self.s1, &self.s2, &self.t1, &self.t2]
            .iter()
            .any(|v| BigInt::is_negative(v))
            || self.s1 > q3
            || self.t1 > q7
        {
            debug!("bob proof: response out of range");
            return false;
        }

        let curve_coords = match curve_check {
            Some((X, u)) => match (point_coords(X), point_coords(u)) {
                (Ok(X_coords), Ok(u_coords)) => Some((X_coords, u_coords)),
                _ => return false,
            },
            None => None,
        };
        let e = challenge(
            session,
            q,
            statement,
            curve_coords.as_ref(),
            [&self.z, &self.z_prm, &self.t, &self.v, &self.w],
        );

        // g^s1 == X^e · u
        if let Some((X, u)) = curve_check {
            let left = Point::<E>::generator()
                * Scalar::<E>::from_bigint(&self.s1);
            let right = X * Scalar::<E>::from_bigint(&e) + u;
            if left != right {
                debug!("bob proof: curve check failed");
                return false;
            }
        }

        // h1^s1 · h2^s2 == z^e · z' mod Ñ
        let left = statement.rp.commit(&self.s1, &self.s2);
        let right = BigInt::mod_mul(
            &BigInt::mod_pow(&self.z, &e, Nt),
            &self.z_prm,
            Nt,
        );
        if left != right {
            debug!("bob proof: commitment to x failed");
            return false;
        }

        // h1^t1 · h2^t2 == t^e · w mod Ñ
        let left = statement.rp.commit(&self.t1, &self.t2);
        let right = BigInt::mod_mul(
            &BigInt::mod_pow(&self.t, &e, Nt),
            &self.w,
            Nt,
        );
        if left != right {
            debug!("bob proof: commitment to y failed");
            return false;
        }

        // c1^s1 · s^N · Γ^t1 · c2^-e == v mod N^2
        let c2_inv_e =
            match mod_pow_with_negative(&statement.c2, &-&e, &NN) {
                Ok(v) => v,
                Err(_) => return false,
            };
        let left = [
            BigInt::mod_pow(&statement.c1, &self.s1, &NN),
            BigInt::mod_pow(&self.s, N, &NN),
            gamma_pow(N, &NN, &self.t1),
            c2_inv_e,
        ]
        .iter()
        .fold(BigInt::one(), |acc, f| BigInt::mod_mul(&acc, f, &NN));
        if left != self.v {
            debug!("bob proof: paillier relation failed");
            return false;
        }
        true
    }

    fn as_ints(&self) -> [BigInt; PROOF_BOB_PARTS] {
        [
            self.z.clone(),
            self.z_prm.clone(),
            self.t.clone(),
            self.v.clone(),
            self.w.clone(),
            self.s.clone(),
            self.s1.clone(),
            self.s2.clone(),
            self.t1.clone(),
            self.t2.clone(),
        ]
    }

    fn from_ints(ints: &[BigInt]) -> Self {
        Self {
            z: ints[0].clone(),
            z_prm: ints[1].clone(),
            t: ints[2].clone(),
            v: ints[3].clone(),
            w: ints[4].clone(),
            s: ints[5].clone(),
            s1: ints[6].clone(),
            s2: ints[7].clone(),
            t1: ints[8].clone(),
            t2: ints[9].clone(),
        }
    }

    /// `[z, z', t, v, w, s, s1, s2, t1, t2]`
    pub fn to_bytes_parts(&self) -> Vec<Vec<u8>> {
        big_ints_to_bytes(&self.as_ints())
    }

    pub fn from_bytes_parts<B: AsRef<[u8]>>(parts: &[B]) -> Result<Self> {
        let ints = decode_proof_parts(parts, PROOF_BOB_PARTS, "bob proof")?;
        Ok(Self::from_ints(&ints))
    }
}

impl<E: Curve> ProofBobWc<E> {
    /// Proves the relation and that `X = g^x`. Uses fresh randomness on
    /// every call.
    pub fn prove(
        session: &[u8],
        statement: &BobStatement,
        witness: &BobWitness,
        X: &Point<E>,
    ) -> Result<Self> {
        let (proof, u) = prove_core(session, statement, witness, Some(X))?;
        let u = u.ok_or(Error::Encoding)?;
        Ok(Self { proof, u })
    }

    pub fn verify(
        &self,
        session: &[u8],
        statement: &BobStatement,
        X: &Point<E>,
    ) -> bool {
        self.proof.verify_core(session, statement, Some((X, &self.u)))
    }

    /// `[z, z', t, v, w, s, s1, s2, t1, t2, u.x, u.y]`
    pub fn to_bytes_parts(&self) -> Result<Vec<Vec<u8>>> {
        let (u_x, u_y) = point_coords(&self.u)?;
        let mut parts = self.proof.to_bytes_parts();
        parts.extend(big_ints_to_bytes(&[u_x, u_y]));
        Ok(parts)
    }

    pub fn from_bytes_parts<B: AsRef<[u8]>>(parts: &[B]) -> Result<Self> {
        let ints = decode_proof_parts(
            parts,
            PROOF_BOB_WC_PARTS,
            "bob proof with check",
        )?;
        let u = point_from_coords(&ints[10], &ints[11])?;
        Ok(Self {
            proof: ProofBob::from_ints(&ints[..PROOF_BOB_PARTS]),
            u,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::testing::{init_testing, paillier_key, ring_pedersen};
    use curv::elliptic::curves::Secp256k1;

    fn int(s: &str) -> BigInt {
        BigInt::from_str_radix(s, 10).unwrap()
    }

    // A complete ProveBobWC instance over secp256k1 with a 2048-bit N.
    fn fixed_instance() -> (BobStatement, BobWitness, Point<Secp256k1>) {
        let statement = BobStatement {
            pk: PublicKey::new(int("24261589004465272731249327803101071103792958802723210985329987798404286346832084145379821062390362511363592469465551036623716847742366801146734075048032103335288069058682991894283824242201941990356426107676283864045055933692254494542670287211729114434164797753179698775293789682407290565454766674083988564005545698061330433346903087394170496980007835487898180646656591606889559906608994560791838505934557241218559133947318663171630480041559848077544934775873477027858500504325199526168809286442772506257956278830238227308912498225476420365415416389640465904626483958374392724811019844436417721814708231141829835974781")),
            rp: RingPedersenParams {
                ntilde: int("25107490776052945575790163886980744121852075793230702092031092910315419013111724585107741342302647097816029689069156500419649067226989207335403141846585589456214707140363806918024254341805807847344462552372749802373561411623464018306841140152736878126807643286464707464144491205717529334857128642937311664356950670200785184493082292988908234459722618881044613550904554507333793627844968327344517418351075665978629614435510466378211576459017353838583039397930178040557511540818370302033808216608330168909665648805527673068950251148153088673193641290377199021831923470431364077200419352774733381328839199321622201645277"),
                h1: int("947268510305326446073634507724913447936734171636912400557401318775427643035322780043344044871778218536295489345747992085537349997385753459769909944243608187249295932620582767525243046024431872134558350124222211815956076009495579000118546531817489783543950708796804986346442485595844139040615169351977594594085460608932273701244091036215057114383266995365365226626217411088112095883376367775475107954293975266374705057036496941779873360807750450088301028537780564210964889218799820623451941121168857520561736570209171665676631521362739174866629364755585577716299287494251706261472512421959632149833106509542229972234"),
                h2: int("369382535766024782757053511943484023707590301248858510505619543451105355366349475321600848828578055383112252081262740450957242693258711711573898608872557215737850380375149487180022863563616178163440683814662347260503803753150609907077552201623376131096249150783552367189222999632342102603491398593162398739317344334427947844029843540621897547082716967267285286086227255034044222917612280937408214149645699005643727644027239999997789724357422423935120674874708262799420509411969660535187315093553065000790565517535769427338692918882249946664488170641583406635227373502217028982923125561321182147198392699754510926843"),
            },
            c1: int("400188980994774655609968091936620060124194780418395642324023940691239945255312247610992811612431249936152054069340910452935275205487424854634246828482246352144337182419040538212228852534225304174368343947023564538801615828687299316803241803369288485506946718273947431531973813858828408905751899378227757543579871688504974553109136356994904735037599168566303793641249248025873904193154372979358251360874998196205783452661730986829472793946270963339861788192770799371305531044326953375551834910629477333425892458792662376368650895554603125094896843040198744699366418823291775347326054231834531358977230768426742453712318682737791792820647755652215856663778772847375042277205326803580443908810548115875614952826259458257258493697853793646331037887120817707513503571379434818731866933591449738884942230286964560975261495708985005280778505293251103037083314378974282722058952927812473759779022197254469017388422994057180505540627929700170170320971992028762205724059261013866722334225838238320698563687792441899338330349607215301028623539836617463866851633411657797882767517790720192752726498897268976870434440522723184905076615752830635734406782805309804373897258628489152609956916649503127542627206201799628788404190292045079845695539005"),
            c2: int("98573216923670029482821115497694158997701755867518675487809563002262969374429334440082681941600401097934556988790183729523580720309003894174143686603097011750180621654263582730257639883377054326574168737200415168109016934596056214113130498173847556339154501370028792265841294296659920063110922540964643954044560558816019775357577881424654115472796241983478183026500401778150566430093557176244961750759228035574132175895475959282423213068981255863315840431505638769681064902513786237796323681661253900688171694813024684962553099575687213643953866670007212555321378763872102032075258716404994287465655087264659390259026908282688806618224771400409708056097235104949067246227149153871512407333953827944360034115190003167379402652418218088558623986757262384661381181534752894246084721691776580316855378370830325218479465488778739115168862573546202079589373938148889660862603212262415001010351315286539400994916127576235285929134852940474957058813438546566643450052998120855803755264759031202653355459212026268818145535080517620144856445898319577455911245421862936535731411912720397377403186779885488966511055963605408874871060573451766442775230526695777998996381124371051298228555236557500794840592492822277944138084212794148491560062194"),
        };
        let witness = BobWitness::new(
            int("20872918044507599492457919043155243332921084283187084425223278835323345316707"),
            int("13365803136768827314472359487832734942388024092573771842356564480371273430093788764148177649590147601079991374084731619027142332042824767083157035176876340102099960663493606582967420224789162175044870543176867902664052695037517942038248013816833256471600451521497813841165600589598039533465498062819816581880369639821378040565954040957506700021927229986652022091615738614219190677069635"),
            int("21617745718658475423967690137755260260751176145758099656379627827529447465873941447558271433560154929175996297478257677991009360164924302078973592231666628498979499849260499718709195852482305685149481840993520270133375205592174152961925586484451711506799685098224993369966535853381357250207917204040666031452544422143667110446801956906625901747974275844240807779974858102640852085251773464817602345912999959784397499248630936345359919089789880396555926854044371853388456300266725449255410786594189679918897998146392256946271699268332250404359035739120314312721689120835606374439344529292527051773663149198509109589298"),
        );
        let X = Point::<Secp256k1>::from_coords(
            &int("104639075809233846840558005847879026027812042860709851555234497260916054215660"),
            &int("75893047884391164204942577163850331696590636042088436736848678939010438699885"),
        )
        .unwrap();
        (statement, witness, X)
    }

    // Bob's side of an MtA run against the test fixtures.
    fn random_instance() -> (BobStatement, BobWitness, Point<Secp256k1>) {
        let pk = paillier_key().public_key().clone();
        let (rp, _) = ring_pedersen();
        let q = Scalar::<Secp256k1>::group_order();
        let a = get_random_positive_int(q);
        let c1 = pk.encrypt(&a).unwrap();
        let x = Scalar::<Secp256k1>::random();
        let y = get_random_positive_int(&BigInt::pow(q, MTA_Y_EXP));
        let (c_y, r) = pk.encrypt_and_return_randomness(&y).unwrap();
        let c2 = pk
            .homo_add(&pk.homo_mult(&x.to_bigint(), &c1).unwrap(), &c_y)
            .unwrap();
        let statement = BobStatement {
            pk,
            rp: rp.clone(),
            c1,
            c2,
        };
        let X = Point::<Secp256k1>::generator() * &x;
        (statement, BobWitness::new(x.to_bigint(), y, r), X)
    }

    #[test]
    fn test_fixed_instance_verifies() {
        init_testing();
        let (statement, witness, X) = fixed_instance();
        let proof =
            ProofBobWc::prove(b"session", &statement, &witness, &X).unwrap();
        assert!(proof.verify(b"session", &statement, &X));
        assert!(!proof.verify(b"other session", &statement, &X));

        let proof =
            ProofBob::prove::<Secp256k1>(b"session", &statement, &witness)
                .unwrap();
        assert!(proof.verify::<Secp256k1>(b"session", &statement));
    }

    #[test]
    fn test_proof_bob_wc() {
        let (statement, witness, X) = random_instance();
        let proof =
            ProofBobWc::prove(b"sign-1", &statement, &witness, &X).unwrap();
        assert!(proof.verify(b"sign-1", &statement, &X));
        assert!(!proof.verify(b"sign-2", &statement, &X));

        let other_X = Point::<Secp256k1>::generator() * Scalar::random();
        assert!(!proof.verify(b"sign-1", &statement, &other_X));

        let mut other = statement.clone();
        other.c2 = statement.pk.homo_add(&statement.c2, &statement.c1).unwrap();
        assert!(!proof.verify(b"sign-1", &other, &X));
    }

    #[test]
    fn test_proof_bob() {
        let (statement, witness, _) = random_instance();
        let proof =
            ProofBob::prove::<Secp256k1>(b"sign-1", &statement, &witness)
                .unwrap();
        assert!(proof.verify::<Secp256k1>(b"sign-1", &statement));
        assert!(!proof.verify::<Secp256k1>(b"sign-2", &statement));

        let mut tampered = proof.clone();
        tampered.s1 = &tampered.s1 + BigInt::one();
        assert!(!tampered.verify::<Secp256k1>(b"sign-1", &statement));

        let mut tampered = proof.clone();
        tampered.t1 = &tampered.t1 + BigInt::pow(
            Scalar::<Secp256k1>::group_order(),
            MTA_GAMMA_EXP,
        );
        assert!(!tampered.verify::<Secp256k1>(b"sign-1", &statement));

        let mut tampered = proof;
        tampered.v = BigInt::zero();
        assert!(!tampered.verify::<Secp256k1>(b"sign-1", &statement));
    }

    #[test]
    fn test_prove_rejects_out_of_range_witness() {
        let (statement, _, X) = random_instance();
        let q = Scalar::<Secp256k1>::group_order();
        let r = sample_relatively_prime_integer(&statement.pk.n);

        let witness = BobWitness::new(q.clone(), BigInt::one(), r.clone());
        assert_eq!(
            ProofBobWc::prove(b"s", &statement, &witness, &X).err(),
            Some(Error::RangeViolation)
        );
        let witness = BobWitness::new(
            BigInt::one(),
            BigInt::pow(q, MTA_Y_EXP),
            r.clone(),
        );
        assert_eq!(
            ProofBob::prove::<Secp256k1>(b"s", &statement, &witness).err(),
            Some(Error::RangeViolation)
        );
        let witness = BobWitness::new(BigInt::from(-1), BigInt::one(), r);
        assert_eq!(
            ProofBob::prove::<Secp256k1>(b"s", &statement, &witness).err(),
            Some(Error::RangeViolation)
        );
    }

    #[test]
    fn test_prove_rejects_degenerate_statement() {
        let (statement, witness, X) = random_instance();

        let mut bad = statement.clone();
        bad.rp.ntilde = BigInt::zero();
        assert_eq!(
            ProofBobWc::prove(b"s", &bad, &witness, &X).err(),
            Some(Error::InvalidModulus)
        );
        let proof =
            ProofBob::prove::<Secp256k1>(b"s", &statement, &witness).unwrap();
        assert!(!proof.verify::<Secp256k1>(b"s", &bad));

        let mut bad = statement.clone();
        bad.rp.h2 = BigInt::zero();
        assert_eq!(
            ProofBob::prove::<Secp256k1>(b"s", &bad, &witness).err(),
            Some(Error::Encoding)
        );

        let mut bad = statement;
        bad.pk = PublicKey::new(BigInt::from(-5));
        assert_eq!(
            ProofBob::prove::<Secp256k1>(b"s", &bad, &witness).err(),
            Some(Error::InvalidModulus)
        );
    }

    #[test]
    fn test_prove_rejects_point_at_infinity() {
        let (statement, witness, _) = random_instance();
        assert_eq!(
            ProofBobWc::prove(
                b"s",
                &statement,
                &witness,
                &Point::<Secp256k1>::zero()
            )
            .err(),
            Some(Error::Encoding)
        );
    }

    #[test]
    fn test_proof_transport() {
        let (statement, witness, X) = random_instance();
        let proof =
            ProofBobWc::prove(b"sign-1", &statement, &witness, &X).unwrap();

        let parts = proof.to_bytes_parts().unwrap();
        assert_eq!(parts.len(), PROOF_BOB_WC_PARTS);
        let decoded =
            ProofBobWc::<Secp256k1>::from_bytes_parts(&parts).unwrap();
        assert_eq!(decoded, proof);
        assert!(decoded.verify(b"sign-1", &statement, &X));

        assert_eq!(
            ProofBobWc::<Secp256k1>::from_bytes_parts(&parts[..11]).err(),
            Some(Error::MalformedProof("bob proof with check"))
        );
        let mut off_curve = parts.clone();
        off_curve[11] = vec![1];
        assert_eq!(
            ProofBobWc::<Secp256k1>::from_bytes_parts(&off_curve).err(),
            Some(Error::Encoding)
        );

        let bob_parts = proof.proof.to_bytes_parts();
        assert_eq!(bob_parts.len(), PROOF_BOB_PARTS);
        assert_eq!(
            ProofBob::from_bytes_parts(&bob_parts).unwrap(),
            proof.proof
        );
        assert_eq!(
            ProofBob::from_bytes_parts(&parts),
            Err(Error::MalformedProof("bob proof"))
        );

        let encoded = bincode::serialize(&proof).unwrap();
        let decoded: ProofBobWc<Secp256k1> =
            bincode::deserialize(&encoded).unwrap();
        assert!(decoded.verify(b"sign-1", &statement, &X));
    }
}
